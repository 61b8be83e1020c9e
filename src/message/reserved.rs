//! Reserved field names used to carry correlation metadata.
//!
//! A reserved name is a canonical prefix such as `conversation`, matched
//! ignoring ASCII case, optionally followed by a separator and a numeric
//! suffix: `conversation`, `Conversation-25`, `authorization::3949494`,
//! `conversation25`. Suffixes stay as text so leading zeros survive.
//!
//! Matching never fails: a name that does not fit the grammar is simply not
//! reserved.

use std::fmt;

/// Separators that may follow a reserved prefix.
///
/// Longer separators come first so that `::` is not read as `:` followed by
/// a stray colon. The empty separator means digits follow the prefix
/// directly.
pub const SEPARATORS: [&str; 5] = ["::", ":", "/", "-", ""];

/// A reserved field-name kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedToken {
    /// Authorization credentials or correlators.
    Authorization,
    /// Conversation correlators.
    Conversation,
}

/// A successful reserved-name match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedTokenMatch<'a> {
    /// The kind of reserved name.
    pub token: ReservedToken,
    /// The separator after the prefix; `Some("")` when digits follow the
    /// prefix directly and `None` when nothing follows it.
    pub separator: Option<&'static str>,
    /// The digit run after the separator, when the remainder is one.
    pub suffix: Option<&'a str>,
}

impl ReservedToken {
    /// Every reserved kind.
    pub const ALL: [Self; 2] = [Self::Authorization, Self::Conversation];

    /// Returns the canonical prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authorization => "authorization",
            Self::Conversation => "conversation",
        }
    }

    /// Matches `name` against this kind's grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlip::message::reserved::ReservedToken;
    ///
    /// let found = ReservedToken::Conversation
    ///     .match_field("Conversation-0042")
    ///     .expect("reserved name");
    /// assert_eq!(found.separator, Some("-"));
    /// assert_eq!(found.suffix, Some("0042"));
    ///
    /// assert!(ReservedToken::Conversation.match_field("conversational").is_none());
    /// ```
    #[must_use]
    pub fn match_field(self, name: &str) -> Option<ReservedTokenMatch<'_>> {
        let rest = strip_prefix_ignore_case(name, self.as_str())?;

        if rest.is_empty() {
            return Some(ReservedTokenMatch {
                token: self,
                separator: None,
                suffix: None,
            });
        }

        if is_digit_run(rest) {
            return Some(ReservedTokenMatch {
                token: self,
                separator: Some(""),
                suffix: Some(rest),
            });
        }

        let (separator, tail) = SEPARATORS
            .into_iter()
            .filter(|separator| !separator.is_empty())
            .find_map(|separator| rest.strip_prefix(separator).map(|tail| (separator, tail)))?;

        Some(ReservedTokenMatch {
            token: self,
            separator: Some(separator),
            suffix: is_digit_run(tail).then_some(tail),
        })
    }

    /// Returns `true` if `name` is a reserved name of this kind.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        self.match_field(name).is_some()
    }

    /// Matches `name` against every reserved kind.
    #[must_use]
    pub fn identify(name: &str) -> Option<ReservedTokenMatch<'_>> {
        Self::ALL
            .into_iter()
            .find_map(|token| token.match_field(name))
    }
}

impl fmt::Display for ReservedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `name` is an `authorization` reserved name.
#[must_use]
pub fn is_auth(name: &str) -> bool {
    ReservedToken::Authorization.matches(name)
}

/// Returns `true` if `name` is a `conversation` reserved name.
#[must_use]
pub fn is_conv(name: &str) -> bool {
    ReservedToken::Conversation.matches(name)
}

/// Returns the numeric suffix of `name` for a known separator.
///
/// `separator` must be one of [`SEPARATORS`]; any other separator yields
/// `None`. With a non-empty separator the suffix is the text after its last
/// occurrence. With the empty separator the suffix is the digit run that
/// directly follows a reserved prefix. Either way the suffix must be a
/// non-empty run of ASCII digits.
///
/// # Examples
///
/// ```
/// use nlip::message::reserved::get_suffix;
///
/// assert_eq!(get_suffix("conversation-25", "-"), Some("25"));
/// assert_eq!(get_suffix("authorization::3949494", "::"), Some("3949494"));
/// assert_eq!(get_suffix("conversation25", ""), Some("25"));
/// assert_eq!(get_suffix("conversation-id", "-"), None);
/// assert_eq!(get_suffix("conversation_25", "_"), None);
/// ```
#[must_use]
pub fn get_suffix<'a>(name: &'a str, separator: &str) -> Option<&'a str> {
    if !SEPARATORS.contains(&separator) {
        return None;
    }

    if separator.is_empty() {
        return ReservedToken::identify(name)
            .filter(|found| found.separator == Some(""))
            .and_then(|found| found.suffix);
    }

    let (_, tail) = name.rsplit_once(separator)?;
    is_digit_run(tail).then_some(tail)
}

fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if !name.get(..prefix.len())?.eq_ignore_ascii_case(prefix) {
        return None;
    }
    name.get(prefix.len()..)
}

fn is_digit_run(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
