//! Domain types for NLIP messages.
//!
//! This module contains pure value types with no I/O. All types are
//! immutable after construction and serialisable via serde.

mod content;
mod format;
mod message;

pub use content::Content;
pub use format::{Format, ParseFormatError, format_equals, parse_format};
pub use message::{
    DEFAULT_LANGUAGE, Message, MessageBuilder, MessageFields, SubMessage, encode_text,
};
