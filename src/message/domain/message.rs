//! The NLIP message tree: a root [`Message`] and its ordered [`SubMessage`]s.
//!
//! Both node kinds are immutable after construction. Extending a message
//! consumes it and returns the extended value, so a sub-message sequence only
//! ever grows by appending.

use super::{Content, Format};
use crate::message::error::MessageError;
use serde::{Deserialize, Serialize};

/// Language used when a text field is built or extracted without one.
pub const DEFAULT_LANGUAGE: &str = "english";

/// The fields shared by every node of a message tree.
///
/// Extraction is written once against this capability. Only a root
/// [`Message`] has children; leaf nodes report an empty sequence.
pub trait MessageFields {
    /// Returns the field format.
    fn format(&self) -> Format;

    /// Returns the subformat exactly as stored.
    fn subformat(&self) -> &str;

    /// Returns the field content.
    fn content(&self) -> &Content;

    /// Returns the nested sub-messages in insertion order.
    fn submessages(&self) -> &[SubMessage] {
        &[]
    }

    /// Returns `true` if the subformat equals `subformat`, ignoring case.
    fn subformat_matches(&self, subformat: &str) -> bool {
        self.subformat().to_lowercase() == subformat.to_lowercase()
    }
}

fn check_content(format: Format, content: &Content) -> Result<(), MessageError> {
    if format.requires_text() && !content.is_text() {
        return Err(MessageError::TextContentRequired { format });
    }
    Ok(())
}

/// A leaf field nested inside a [`Message`].
///
/// # Examples
///
/// ```
/// use nlip::message::domain::{Format, MessageFields, SubMessage};
///
/// let sub = SubMessage::text("French", "Bonjour");
/// assert_eq!(sub.format(), Format::Text);
/// assert!(sub.subformat_matches("french"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireSubMessage")]
pub struct SubMessage {
    format: Format,
    subformat: String,
    content: Content,
}

impl SubMessage {
    /// Creates a sub-message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::TextContentRequired`] when `format` only
    /// accepts text and `content` is structured.
    pub fn new(
        format: Format,
        subformat: impl Into<String>,
        content: impl Into<Content>,
    ) -> Result<Self, MessageError> {
        let body: Content = content.into();
        check_content(format, &body)?;
        Ok(Self {
            format,
            subformat: subformat.into(),
            content: body,
        })
    }

    /// Creates a text sub-message in the given language.
    #[must_use]
    pub fn text(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            format: Format::Text,
            subformat: language.into(),
            content: Content::Text(text.into()),
        }
    }

    /// Creates a token sub-message.
    #[must_use]
    pub fn token(subformat: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            format: Format::Token,
            subformat: subformat.into(),
            content: Content::Text(token.into()),
        }
    }
}

impl MessageFields for SubMessage {
    fn format(&self) -> Format {
        self.format
    }

    fn subformat(&self) -> &str {
        &self.subformat
    }

    fn content(&self) -> &Content {
        &self.content
    }
}

/// A root NLIP message.
///
/// A message carries its own field plus an ordered list of sub-messages.
/// The `control` flag marks messages addressed to the receiving agent's
/// runtime rather than to its conversation.
///
/// # Examples
///
/// ```
/// use nlip::message::domain::{Format, Message, MessageFields, SubMessage};
/// use serde_json::json;
///
/// let location = json!({"lat": 48.85, "lon": 2.35});
/// let message = Message::builder(Format::Text, "english", "Meet me here")
///     .with_submessage(
///         SubMessage::new(
///             Format::Location,
///             "geo",
///             location.as_object().cloned().unwrap_or_default(),
///         )
///         .expect("structured content is allowed for locations"),
///     )
///     .build()
///     .expect("valid message");
///
/// assert!(!message.is_control());
/// assert_eq!(message.submessages().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireMessage")]
pub struct Message {
    control: bool,
    format: Format,
    subformat: String,
    content: Content,
    submessages: Vec<SubMessage>,
}

impl Message {
    /// Creates a message with no sub-messages.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::TextContentRequired`] when `format` only
    /// accepts text and `content` is structured.
    pub fn new(
        control: bool,
        format: Format,
        subformat: impl Into<String>,
        content: impl Into<Content>,
    ) -> Result<Self, MessageError> {
        Self::builder(format, subformat, content)
            .control(control)
            .build()
    }

    /// Returns a builder for a message with the given primary field.
    #[must_use]
    pub fn builder(
        format: Format,
        subformat: impl Into<String>,
        content: impl Into<Content>,
    ) -> MessageBuilder {
        MessageBuilder::new(format, subformat, content)
    }

    /// Returns `true` for control messages.
    #[must_use]
    pub const fn is_control(&self) -> bool {
        self.control
    }

    /// Appends a sub-message and returns the extended message.
    #[must_use]
    pub fn with_submessage(mut self, submessage: SubMessage) -> Self {
        self.submessages.push(submessage);
        self
    }
}

impl MessageFields for Message {
    fn format(&self) -> Format {
        self.format
    }

    fn subformat(&self) -> &str {
        &self.subformat
    }

    fn content(&self) -> &Content {
        &self.content
    }

    fn submessages(&self) -> &[SubMessage] {
        &self.submessages
    }
}

/// Builder for messages with sub-messages or a control flag.
#[derive(Debug)]
pub struct MessageBuilder {
    control: bool,
    format: Format,
    subformat: String,
    content: Content,
    submessages: Vec<SubMessage>,
}

impl MessageBuilder {
    /// Creates a builder for a non-control message.
    #[must_use]
    pub fn new(format: Format, subformat: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            control: false,
            format,
            subformat: subformat.into(),
            content: content.into(),
            submessages: Vec::new(),
        }
    }

    /// Sets the control flag.
    #[must_use]
    pub const fn control(mut self, control: bool) -> Self {
        self.control = control;
        self
    }

    /// Appends a sub-message.
    #[must_use]
    pub fn with_submessage(mut self, submessage: SubMessage) -> Self {
        self.submessages.push(submessage);
        self
    }

    /// Appends several sub-messages in iteration order.
    #[must_use]
    pub fn with_submessages(mut self, submessages: impl IntoIterator<Item = SubMessage>) -> Self {
        self.submessages.extend(submessages);
        self
    }

    /// Builds the message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::TextContentRequired`] when the primary format
    /// only accepts text and the content is structured.
    pub fn build(self) -> Result<Message, MessageError> {
        check_content(self.format, &self.content)?;
        Ok(Message {
            control: self.control,
            format: self.format,
            subformat: self.subformat,
            content: self.content,
            submessages: self.submessages,
        })
    }
}

/// Builds a text message with no sub-messages.
///
/// # Examples
///
/// ```
/// use nlip::message::domain::{encode_text, Format, MessageFields};
///
/// let message = encode_text("Hola", false, "spanish");
/// assert_eq!(message.format(), Format::Text);
/// assert_eq!(message.subformat(), "spanish");
/// assert!(message.submessages().is_empty());
/// ```
#[must_use]
pub fn encode_text(
    content: impl Into<String>,
    control: bool,
    language: impl Into<String>,
) -> Message {
    Message {
        control,
        format: Format::Text,
        subformat: language.into(),
        content: Content::Text(content.into()),
        submessages: Vec::new(),
    }
}

#[derive(Deserialize)]
struct WireSubMessage {
    format: Format,
    subformat: String,
    content: Content,
}

impl TryFrom<WireSubMessage> for SubMessage {
    type Error = MessageError;

    fn try_from(wire: WireSubMessage) -> Result<Self, Self::Error> {
        Self::new(wire.format, wire.subformat, wire.content)
    }
}

#[derive(Deserialize)]
struct WireMessage {
    #[serde(default)]
    control: bool,
    format: Format,
    subformat: String,
    content: Content,
    #[serde(default)]
    submessages: Vec<SubMessage>,
}

impl TryFrom<WireMessage> for Message {
    type Error = MessageError;

    fn try_from(wire: WireMessage) -> Result<Self, Self::Error> {
        Self::builder(wire.format, wire.subformat, wire.content)
            .control(wire.control)
            .with_submessages(wire.submessages)
            .build()
    }
}
