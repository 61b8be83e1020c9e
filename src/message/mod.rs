//! The NLIP message envelope and the operations defined over it.
//!
//! # Layout
//!
//! - **Domain**: value types ([`domain::Message`], [`domain::SubMessage`],
//!   [`domain::Format`], [`domain::Content`])
//! - **Extraction**: format/subformat matching and text concatenation
//! - **Reserved**: the reserved field-name grammar (`conversation`,
//!   `authorization`)
//! - **Correlation**: attaching and retrieving correlation tokens
//! - **Codec**: JSON encoding with validation on decode
//!
//! # Example
//!
//! ```
//! use nlip::message::correlation::{add_conversation_token, extract_conversation_token};
//! use nlip::message::domain::{encode_text, SubMessage};
//! use nlip::message::extraction::ExtractionConfig;
//!
//! let greeting = encode_text("Hello world!", false, "English")
//!     .with_submessage(SubMessage::text("english", "Goodbye world!"));
//! let message = add_conversation_token(greeting, "0042");
//!
//! let text = ExtractionConfig::default().extract_text(Some(&message));
//! assert_eq!(text, "Hello world! Goodbye world!");
//! assert_eq!(extract_conversation_token(&message), Some("0042"));
//! ```

pub mod codec;
pub mod correlation;
pub mod domain;
pub mod error;
pub mod extraction;
pub mod reserved;

#[cfg(test)]
mod tests;
