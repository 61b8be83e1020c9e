//! Error types for message construction and encoding.
//!
//! Uses `thiserror` for typed variants that callers can inspect. A field that
//! does not match an extraction request is never an error.

use super::domain::{Format, ParseFormatError};
use thiserror::Error;

/// Errors raised while building or querying messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// A format name is not one of the NLIP formats.
    #[error(transparent)]
    UnknownFormat(#[from] ParseFormatError),

    /// Structured content was supplied for a format that only carries text.
    #[error("format '{format}' requires text content")]
    TextContentRequired {
        /// The format that rejected the content.
        format: Format,
    },
}

/// Errors raised by the JSON codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The message could not be serialised.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The input is not a valid NLIP message.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl CodecError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a deserialization error.
    #[must_use]
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }
}
