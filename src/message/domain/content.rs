//! Field content carried by messages and sub-messages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The content of a message field.
///
/// Content is either plain text or a structured JSON object. The variant is
/// fixed when the field is built; formats such as
/// [`Format::Text`](super::Format::Text) only accept the text variant.
///
/// # Serialisation
///
/// Content is untagged on the wire: text is a JSON string and structured
/// content is a JSON object.
///
/// ```
/// use nlip::message::domain::Content;
/// use serde_json::json;
///
/// let text: Content = serde_json::from_value(json!("hello")).expect("text");
/// assert_eq!(text.as_text(), Some("hello"));
///
/// let map: Content = serde_json::from_value(json!({"lat": 1.5})).expect("map");
/// assert!(map.as_structured().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// A structured key/value payload.
    Structured(Map<String, Value>),
}

impl Content {
    /// Creates text content.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the text, if this is text content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    /// Returns the map, if this is structured content.
    #[must_use]
    pub const fn as_structured(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Text(_) => None,
            Self::Structured(map) => Some(map),
        }
    }

    /// Returns `true` for text content.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Map<String, Value>> for Content {
    fn from(value: Map<String, Value>) -> Self {
        Self::Structured(value)
    }
}
