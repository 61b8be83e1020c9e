//! JSON encoding of NLIP messages.
//!
//! Decoding is where untrusted format names and content shapes are
//! validated: a decoded [`Message`] satisfies the same invariants as one
//! built in code.
//!
//! ```json
//! {
//!   "control": false,
//!   "format": "text",
//!   "subformat": "english",
//!   "content": "Hello",
//!   "submessages": [
//!     { "format": "token", "subformat": "conversation", "content": "12345" }
//!   ]
//! }
//! ```

use crate::message::{
    domain::{Message, MessageFields},
    error::CodecError,
};

/// Encodes a message as compact JSON.
///
/// # Errors
///
/// Returns [`CodecError::Serialization`] if serde fails to encode the message.
pub fn encode_json(message: &Message) -> Result<String, CodecError> {
    serde_json::to_string(message).map_err(|e| CodecError::serialization(e.to_string()))
}

/// Encodes a message as indented JSON.
///
/// # Errors
///
/// Returns [`CodecError::Serialization`] if serde fails to encode the message.
pub fn encode_json_pretty(message: &Message) -> Result<String, CodecError> {
    serde_json::to_string_pretty(message).map_err(|e| CodecError::serialization(e.to_string()))
}

/// Decodes a message from JSON text.
///
/// `format` names are accepted in any casing; a missing `submessages` array
/// is read as empty and a missing `control` flag as `false`.
///
/// # Errors
///
/// Returns [`CodecError::Deserialization`] when the input is not JSON, names
/// an unknown format, or carries structured content for a text-only format.
///
/// # Examples
///
/// ```
/// use nlip::message::codec::decode_json;
/// use nlip::message::extraction::extract_text;
///
/// let message = decode_json(
///     r#"{"format": "TEXT", "subformat": "English", "content": "Hello world!"}"#,
/// )
/// .expect("valid message");
/// assert_eq!(extract_text(Some(&message), Some("english"), " "), "Hello world!");
/// ```
pub fn decode_json(input: &str) -> Result<Message, CodecError> {
    let message: Message =
        serde_json::from_str(input).map_err(|e| CodecError::deserialization(e.to_string()))?;
    log_decoded(&message);
    Ok(message)
}

/// Decodes a message from JSON bytes.
///
/// # Errors
///
/// Returns [`CodecError::Deserialization`] under the same conditions as
/// [`decode_json`].
pub fn decode_slice(input: &[u8]) -> Result<Message, CodecError> {
    let message: Message =
        serde_json::from_slice(input).map_err(|e| CodecError::deserialization(e.to_string()))?;
    log_decoded(&message);
    Ok(message)
}

fn log_decoded(message: &Message) {
    tracing::debug!(
        format = %message.format(),
        control = message.is_control(),
        submessages = message.submessages().len(),
        "decoded message"
    );
}
