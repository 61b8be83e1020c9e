//! The closed set of content formats defined by NLIP.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The format of a message or sub-message field.
///
/// Format names are matched case-insensitively when parsed; once parsed, a
/// `Format` is a plain value and compares by identity.
///
/// # Serialisation
///
/// Formats serialise as their lowercase name and deserialise from any casing:
///
/// ```
/// use nlip::message::domain::Format;
///
/// let format: Format = serde_json::from_str("\"TeXt\"").expect("known format");
/// assert_eq!(format, Format::Text);
/// assert_eq!(serde_json::to_string(&format).expect("serialise"), "\"text\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Format {
    /// Natural-language text; the subformat is the language.
    Text,
    /// An opaque token, such as a conversation or authorization correlator.
    Token,
    /// A structured key/value payload.
    Structured,
    /// Binary data in an agreed encoding.
    Binary,
    /// A location reference.
    Location,
    /// Content whose interpretation is left to the subformat.
    Generic,
}

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Token,
        Self::Structured,
        Self::Binary,
        Self::Location,
        Self::Generic,
    ];

    /// Parses a format name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFormatError`] when `name` is not one of the six NLIP
    /// formats.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlip::message::domain::Format;
    ///
    /// assert_eq!(Format::parse("Structured"), Ok(Format::Structured));
    /// assert!(Format::parse("video").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, ParseFormatError> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFormatError(name.to_owned()))
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Token => "token",
            Self::Structured => "structured",
            Self::Binary => "binary",
            Self::Location => "location",
            Self::Generic => "generic",
        }
    }

    /// Returns `true` if content of this format must be a string.
    #[must_use]
    pub const fn requires_text(self) -> bool {
        matches!(self, Self::Text | Self::Token | Self::Generic)
    }
}

/// Parses a format name, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`ParseFormatError`] for names outside the closed format set.
pub fn parse_format(name: &str) -> Result<Format, ParseFormatError> {
    Format::parse(name)
}

/// Returns `true` when both formats are the same.
#[must_use]
pub fn format_equals(a: Format, b: Format) -> bool {
    a == b
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Format {
    type Error = ParseFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Format {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format '{0}'")]
pub struct ParseFormatError(pub String);
