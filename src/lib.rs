//! NLIP: a small interoperable message envelope for agent-to-agent exchange.
//!
//! This crate models NLIP messages, possibly multilingual and nested one
//! level deep, and provides pure functions to build them, match their fields
//! by format and subformat, concatenate their text, and carry correlation
//! tokens as reserved sub-messages.
//!
//! Transport, authentication enforcement and routing are left to callers.
//!
//! # Modules
//!
//! - [`message`]: the message model and every operation over it

pub mod message;
