//! Unit tests for correlation token helpers.

use super::fixtures::{bilingual_message, mixed_message, object};
use crate::message::{
    correlation::{
        add_authorization_token, add_conversation_token, extract_authorization_token,
        extract_conversation_token, reserved_submessages,
    },
    domain::{Format, Message, MessageFields, SubMessage, encode_text},
    extraction::extract_text,
    reserved::ReservedToken,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("12345")]
#[case("0")]
#[case("000123")]
#[case("a1b2-c3d4-e5f6")]
#[case("")]
fn conversation_token_round_trips(bilingual_message: Message, #[case] token: &str) {
    let message = add_conversation_token(bilingual_message, token);
    assert_eq!(extract_conversation_token(&message), Some(token));
}

#[rstest]
fn conversation_token_round_trips_on_bare_message() {
    let message = add_conversation_token(encode_text("hi", true, "english"), "12345");
    assert_eq!(extract_conversation_token(&message), Some("12345"));
}

#[rstest]
fn add_conversation_token_appends_a_token_submessage(mixed_message: Message) {
    let before = mixed_message.submessages().to_vec();
    let message = add_conversation_token(mixed_message, "777");

    let (last, earlier) = message
        .submessages()
        .split_last()
        .expect("token sub-message appended");
    assert_eq!(earlier, before.as_slice());
    assert_eq!(last.format(), Format::Token);
    assert_eq!(last.subformat(), "conversation");
    assert_eq!(last.content().as_text(), Some("777"));
}

#[rstest]
fn adding_a_token_does_not_change_extracted_text(bilingual_message: Message) {
    let before = extract_text(Some(&bilingual_message), Some("english"), " ");
    let message = add_conversation_token(bilingual_message, "1");
    assert_eq!(extract_text(Some(&message), Some("english"), " "), before);
}

#[rstest]
fn extract_conversation_token_without_token_is_none(bilingual_message: Message) {
    assert_eq!(extract_conversation_token(&bilingual_message), None);
}

#[rstest]
fn extract_conversation_token_returns_the_first_match() {
    let first = add_conversation_token(encode_text("hi", false, "english"), "first");
    let both = add_conversation_token(first, "second");
    assert_eq!(extract_conversation_token(&both), Some("first"));
}

#[rstest]
fn extract_conversation_token_recognises_suffixed_names() {
    let message = encode_text("hi", false, "english")
        .with_submessage(SubMessage::token("Conversation-42", "abc"));
    assert_eq!(extract_conversation_token(&message), Some("abc"));
}

#[rstest]
fn extract_conversation_token_ignores_root_field() {
    let message = Message::new(false, Format::Token, "conversation", "root").expect("valid");
    assert_eq!(extract_conversation_token(&message), None);
}

#[rstest]
fn extract_conversation_token_skips_structured_entries() {
    let structured = SubMessage::new(
        Format::Structured,
        "conversation",
        object(json!({"id": 1})),
    )
    .expect("structured content is allowed");
    let message = encode_text("hi", false, "english")
        .with_submessage(structured)
        .with_submessage(SubMessage::token("conversation", "text-token"));
    assert_eq!(extract_conversation_token(&message), Some("text-token"));
}

#[rstest]
fn authorization_and_conversation_tokens_are_independent() {
    let authorized = add_authorization_token(encode_text("hi", false, "english"), "secret");
    assert_eq!(extract_conversation_token(&authorized), None);

    let extended = add_conversation_token(authorized, "99");
    assert_eq!(extract_authorization_token(&extended), Some("secret"));
    assert_eq!(extract_conversation_token(&extended), Some("99"));
}

#[rstest]
fn reserved_submessages_lists_token_entries_in_order() {
    let correlated = add_conversation_token(encode_text("hi", false, "english"), "c1")
        .with_submessage(SubMessage::text("english", "not a token"))
        .with_submessage(SubMessage::token("session", "ignored"));
    let extended = add_authorization_token(correlated, "a1");

    let kinds: Vec<_> = reserved_submessages(&extended)
        .into_iter()
        .map(|(kind, sub)| (kind, sub.content().as_text()))
        .collect();
    assert_eq!(
        kinds,
        [
            (ReservedToken::Conversation, Some("c1")),
            (ReservedToken::Authorization, Some("a1")),
        ]
    );
}

#[rstest]
fn reserved_lookup_agrees_on_non_token_formats() {
    let message = encode_text("hi", false, "english")
        .with_submessage(SubMessage::text("conversation", "from-text"));

    assert_eq!(extract_conversation_token(&message), Some("from-text"));
    let listed: Vec<_> = reserved_submessages(&message)
        .into_iter()
        .map(|(kind, sub)| (kind, sub.format()))
        .collect();
    assert_eq!(listed, [(ReservedToken::Conversation, Format::Text)]);
}

#[rstest]
#[case("conversational")]
#[case("conversation_1")]
#[case("my-conversation")]
#[case("authorizations")]
fn unrecognised_reserved_looking_names_are_ordinary_content(#[case] subformat: &str) {
    let message = encode_text("hi", false, "english")
        .with_submessage(SubMessage::token(subformat, "not-a-correlator"));

    assert_eq!(extract_conversation_token(&message), None);
    assert_eq!(extract_authorization_token(&message), None);
    assert!(reserved_submessages(&message).is_empty());
    assert_eq!(
        extract_text(Some(&message), None, " "),
        "hi",
        "the sub-message stays ordinary token content"
    );
}
