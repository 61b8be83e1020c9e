//! Field extraction over message trees.
//!
//! A node matches a request when its format equals the requested format and,
//! if a subformat is requested, its subformat equals the requested one
//! ignoring case. Single-field lookups only look at the node itself; list
//! lookups also visit a message's sub-messages in insertion order.

use crate::message::{
    domain::{Content, DEFAULT_LANGUAGE, Format, MessageFields},
    error::MessageError,
};

/// Separator inserted between text fragments when none is given.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Returns the node's content if its own field matches `format` and
/// `subformat`.
#[must_use]
pub fn match_field<'a, N>(
    node: Option<&'a N>,
    format: Format,
    subformat: Option<&str>,
) -> Option<&'a Content>
where
    N: MessageFields + ?Sized,
{
    let found = node?;
    if found.format() != format {
        return None;
    }
    match subformat {
        Some(wanted) if !found.subformat_matches(wanted) => None,
        _ => Some(found.content()),
    }
}

/// Returns the matching content of the node and of each of its sub-messages,
/// in that order.
#[must_use]
pub fn match_field_list<'a, N>(
    node: Option<&'a N>,
    format: Format,
    subformat: Option<&str>,
) -> Vec<&'a Content>
where
    N: MessageFields + ?Sized,
{
    let Some(root) = node else {
        return Vec::new();
    };

    let fields: Vec<&Content> = match_field(Some(root), format, subformat)
        .into_iter()
        .chain(
            root.submessages()
                .iter()
                .filter_map(|sub| match_field(Some(sub), format, subformat)),
        )
        .collect();

    tracing::trace!(%format, matches = fields.len(), "matched message fields");
    fields
}

/// Extracts the content of the node's own field when it matches the
/// requested format and subformat.
///
/// Sub-messages of a [`Message`](crate::message::domain::Message) are not
/// inspected. A missing node yields `Ok(None)` without parsing `format`.
///
/// # Errors
///
/// Returns [`MessageError::UnknownFormat`] when `format` is not an NLIP
/// format name.
///
/// # Examples
///
/// ```
/// use nlip::message::domain::{Content, encode_text};
/// use nlip::message::extraction::extract_field;
///
/// let message = encode_text("Hello", false, "English");
/// let field = extract_field(Some(&message), "TEXT", Some("english")).expect("known format");
/// assert_eq!(field, Some(&Content::text("Hello")));
/// ```
pub fn extract_field<'a, N>(
    node: Option<&'a N>,
    format: &str,
    subformat: Option<&str>,
) -> Result<Option<&'a Content>, MessageError>
where
    N: MessageFields + ?Sized,
{
    if node.is_none() {
        return Ok(None);
    }
    let parsed = Format::parse(format)?;
    Ok(match_field(node, parsed, subformat))
}

/// Extracts every matching field of the node and its sub-messages.
///
/// The node's own field comes first, followed by sub-message matches in
/// insertion order. Duplicates are kept.
///
/// # Errors
///
/// Returns [`MessageError::UnknownFormat`] when `format` is not an NLIP
/// format name.
pub fn extract_field_list<'a, N>(
    node: Option<&'a N>,
    format: &str,
    subformat: Option<&str>,
) -> Result<Vec<&'a Content>, MessageError>
where
    N: MessageFields + ?Sized,
{
    if node.is_none() {
        return Ok(Vec::new());
    }
    let parsed = Format::parse(format)?;
    Ok(match_field_list(node, parsed, subformat))
}

/// Joins the text fields in `language` found in the node and its
/// sub-messages.
///
/// `separator` is placed between consecutive fragments only. A missing node
/// or a tree without matching text yields an empty string. Passing `None` as
/// the language accepts text in any language.
///
/// # Examples
///
/// ```
/// use nlip::message::domain::{Format, Message, SubMessage};
/// use nlip::message::extraction::extract_text;
///
/// let message = Message::builder(Format::Text, "english", "Hello world!")
///     .with_submessage(SubMessage::text("English", "Goodbye world!"))
///     .build()
///     .expect("valid message");
///
/// assert_eq!(
///     extract_text(Some(&message), Some("english"), " "),
///     "Hello world! Goodbye world!"
/// );
/// ```
#[must_use]
pub fn extract_text<N>(node: Option<&N>, language: Option<&str>, separator: &str) -> String
where
    N: MessageFields + ?Sized,
{
    match_field_list(node, Format::Text, language)
        .into_iter()
        .filter_map(Content::as_text)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Defaults applied by text extraction.
///
/// # Examples
///
/// ```
/// use nlip::message::extraction::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// assert_eq!(config.language.as_deref(), Some("english"));
/// assert_eq!(config.separator, " ");
///
/// let any = ExtractionConfig::any_language().with_separator("\n");
/// assert!(any.language.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Language to match, or `None` for any language.
    pub language: Option<String>,
    /// Separator placed between extracted fragments.
    pub separator: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language: Some(DEFAULT_LANGUAGE.to_owned()),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl ExtractionConfig {
    /// Creates a configuration that accepts text in any language.
    #[must_use]
    pub fn any_language() -> Self {
        Self {
            language: None,
            ..Self::default()
        }
    }

    /// Sets the language to match.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Joins the matching text of `node` using this configuration.
    #[must_use]
    pub fn extract_text<N>(&self, node: Option<&N>) -> String
    where
        N: MessageFields + ?Sized,
    {
        extract_text(node, self.language.as_deref(), &self.separator)
    }
}
