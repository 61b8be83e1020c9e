//! Attaching and retrieving correlation tokens.
//!
//! A correlation token travels as an ordinary `token` sub-message
//! whose subformat is a reserved name. Attaching a token appends a
//! sub-message; retrieving it returns the first sub-message whose subformat
//! is a reserved name of the requested kind.

use crate::message::{
    domain::{Message, MessageFields, SubMessage},
    reserved::ReservedToken,
};

/// Appends `token` as a `conversation` token sub-message.
///
/// # Examples
///
/// ```
/// use nlip::message::correlation::{add_conversation_token, extract_conversation_token};
/// use nlip::message::domain::encode_text;
///
/// let message = add_conversation_token(encode_text("Hi", false, "english"), "12345");
/// assert_eq!(extract_conversation_token(&message), Some("12345"));
/// ```
#[must_use]
pub fn add_conversation_token(message: Message, token: impl Into<String>) -> Message {
    add_token(message, ReservedToken::Conversation, token.into())
}

/// Returns the first `conversation` token carried by `message`.
#[must_use]
pub fn extract_conversation_token(message: &Message) -> Option<&str> {
    extract_token(message, ReservedToken::Conversation)
}

/// Appends `token` as an `authorization` token sub-message.
#[must_use]
pub fn add_authorization_token(message: Message, token: impl Into<String>) -> Message {
    add_token(message, ReservedToken::Authorization, token.into())
}

/// Returns the first `authorization` token carried by `message`.
#[must_use]
pub fn extract_authorization_token(message: &Message) -> Option<&str> {
    extract_token(message, ReservedToken::Authorization)
}

fn add_token(message: Message, kind: ReservedToken, token: String) -> Message {
    tracing::debug!(
        token_kind = %kind,
        position = message.submessages().len(),
        "attaching correlation token"
    );
    message.with_submessage(SubMessage::token(kind.as_str(), token))
}

fn extract_token(message: &Message, kind: ReservedToken) -> Option<&str> {
    message
        .submessages()
        .iter()
        .filter(|sub| reserved_kind(sub) == Some(kind))
        .find_map(|sub| sub.content().as_text())
}

fn reserved_kind(sub: &SubMessage) -> Option<ReservedToken> {
    ReservedToken::identify(sub.subformat()).map(|found| found.token)
}

/// Returns the sub-messages of `message` whose subformat is a reserved name,
/// paired with their kind, in insertion order.
///
/// The format of the sub-message is not checked, matching the lookup used by
/// [`extract_conversation_token`] and [`extract_authorization_token`].
#[must_use]
pub fn reserved_submessages(message: &Message) -> Vec<(ReservedToken, &SubMessage)> {
    message
        .submessages()
        .iter()
        .filter_map(|sub| reserved_kind(sub).map(|kind| (kind, sub)))
        .collect()
}
