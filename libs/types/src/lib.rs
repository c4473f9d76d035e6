//! # Courier Types Library
//!
//! The message abstraction shared by every Courier component: a `Message` is
//! a header (unique string keys mapped to string values) plus a body that is
//! either a text string or a binary string.
//!
//! ## Design Philosophy
//!
//! - **Pure data**: this crate holds the entity and its identity rules only.
//!   Conversion to and from the JSON interchange form lives in `codec`.
//! - **Atomic body/text pairing**: whether a message is text is derived from
//!   the body value itself, so the flag can never drift out of sync with the
//!   payload.
//! - **Stable identity**: `Message::checksum` is a bit-reproducible
//!   fingerprint designed to match independent implementations in other
//!   languages.
//!
//! ## Quick Start
//!
//! ```rust
//! use types::Message;
//!
//! let mut msg = Message::with_body("hello world");
//! msg.header_mut().insert("subject".into(), "test".into());
//! assert!(msg.is_text());
//! assert_eq!(msg.checksum().len(), 32);
//! ```

mod checksum;
pub mod message;

pub use message::{Body, Header, Message};
