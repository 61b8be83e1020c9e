//! Behavioural integration tests for building, exchanging and reading NLIP
//! messages.
//!
//! These tests exercise end-to-end scenarios through the public API only:
//! a message is built, optionally encoded and decoded, and then queried.

use nlip::message::{
    codec::{decode_json, encode_json},
    correlation::{add_conversation_token, extract_conversation_token},
    domain::{Format, Message, MessageFields, SubMessage, encode_text},
    extraction::{ExtractionConfig, extract_field, extract_field_list, extract_text},
    reserved::{get_suffix, is_auth, is_conv},
};

// ============================================================================
// Scenario: an agent greets another agent in plain text
// ============================================================================

/// When an agent encodes a greeting, the receiver should read back exactly
/// the same text regardless of how the language is capitalised.
#[test]
fn plain_text_greeting_is_read_back() {
    // Arrange
    let message = encode_text("Hello world!", true, "English");

    // Act
    let text = ExtractionConfig::default().extract_text(Some(&message));

    // Assert
    assert_eq!(text, "Hello world!");
    assert!(message.is_control());
}

// ============================================================================
// Scenario: a multilingual reply is filtered by language
// ============================================================================

/// When a reply carries text in several languages, only the requested
/// language is concatenated, in the order the parts were added.
#[test]
fn multilingual_reply_is_filtered_by_language() {
    // Arrange
    let message = Message::builder(Format::Text, "english", "Hello world!")
        .with_submessage(SubMessage::text("French", "Bonjour le monde!"))
        .with_submessage(SubMessage::text("English", "Goodbye world!"))
        .build()
        .expect("message creation should succeed");

    // Act
    let english = extract_text(Some(&message), Some("english"), " ");
    let french = extract_text(Some(&message), Some("FRENCH"), " ");

    // Assert
    assert_eq!(english, "Hello world! Goodbye world!");
    assert_eq!(french, "Bonjour le monde!");
}

// ============================================================================
// Scenario: a conversation token survives the wire
// ============================================================================

/// When a sender attaches a conversation token and the message crosses the
/// JSON boundary, the receiver should recover the same token.
#[test]
fn conversation_token_survives_json_exchange() {
    // Arrange
    let outgoing = add_conversation_token(encode_text("Next step?", false, "english"), "12345");

    // Act
    let wire = encode_json(&outgoing).expect("encoding should succeed");
    let incoming = decode_json(&wire).expect("decoding should succeed");

    // Assert
    assert_eq!(extract_conversation_token(&incoming), Some("12345"));
    assert_eq!(
        extract_text(Some(&incoming), Some("english"), " "),
        "Next step?"
    );
}

// ============================================================================
// Scenario: a peer sends reserved names in its own spelling
// ============================================================================

/// When a peer labels its sub-messages with differently spelled reserved
/// names, the receiver should still classify them and read their suffixes.
#[test]
fn peer_reserved_names_are_classified() {
    // Arrange
    let wire = r#"{
        "control": false,
        "format": "Text",
        "subformat": "english",
        "content": "Resuming",
        "submessages": [
            {"format": "TOKEN", "subformat": "Authorization::3949494", "content": "bearer"},
            {"format": "token", "subformat": "Conversation-25", "content": "c-25"}
        ]
    }"#;

    // Act
    let message = decode_json(wire).expect("decoding should succeed");
    let names: Vec<&str> = message
        .submessages()
        .iter()
        .map(MessageFields::subformat)
        .collect();

    // Assert
    assert!(names.first().is_some_and(|name| is_auth(name)));
    assert!(names.get(1).is_some_and(|name| is_conv(name)));
    assert_eq!(
        names.first().and_then(|name| get_suffix(name, "::")),
        Some("3949494")
    );
    assert_eq!(extract_conversation_token(&message), Some("c-25"));
}

// ============================================================================
// Scenario: unknown formats are rejected at the boundary
// ============================================================================

/// When a request names a format outside the NLIP set, the error should
/// surface to the caller rather than silently matching nothing.
#[test]
fn unknown_format_is_reported() {
    // Arrange
    let message = encode_text("Hello", false, "english");

    // Act
    let single = extract_field(Some(&message), "hologram", None);
    let list = extract_field_list(Some(&message), "hologram", None);
    let decoded = decode_json(r#"{"format": "hologram", "subformat": "x", "content": "y"}"#);

    // Assert
    assert!(single.is_err());
    assert!(list.is_err());
    assert!(decoded.is_err());
}

// ============================================================================
// Scenario: nothing to read
// ============================================================================

/// When there is no message, or no matching text, extraction yields empty
/// values rather than errors.
#[test]
fn absent_content_yields_empty_values() {
    // Arrange
    let token_only = Message::new(false, Format::Token, "session", "abc")
        .expect("message creation should succeed");

    // Act & Assert
    assert_eq!(extract_text(None::<&Message>, Some("english"), " "), "");
    assert_eq!(
        extract_field_list(None::<&Message>, "text", None).map(|fields| fields.len()),
        Ok(0)
    );
    assert_eq!(extract_text(Some(&token_only), None, " "), "");
    assert_eq!(extract_conversation_token(&token_only), None);
}
