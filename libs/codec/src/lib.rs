//! # Courier Message Codec
//!
//! ## Purpose
//!
//! This crate contains the conversion rules between the four forms a
//! message can take:
//!
//! ```text
//!             Message
//!                |  ^
//!      jsonify() |  | dejsonify()
//!                v  |
//!           MessageObject            (structured, JSON-compatible)
//!                |  ^
//!    stringify() |  | destringify()
//!                v  |
//!            JSON text
//!                |  ^
//!    serialize() |  | deserialize()
//!                v  |
//!           UTF-8 bytes
//! ```
//!
//! The structured form is the interchange contract: independent
//! implementations in other languages read and write the same four-field
//! object (`header`, `body`, `text`, `encoding`), and a shared compliance
//! corpus of pre-serialized messages, keyed by canonical checksum, proves
//! the implementations agree byte-for-byte.
//!
//! ## Encoding chain
//!
//! A body that cannot sit directly in a JSON string is transformed, and the
//! `encoding` field records the applied transforms as a `+`-joined token
//! list in application order. The vocabulary is fixed: `base64`, `utf8`,
//! and one token per known compression algorithm (`zlib`, `snappy`, `lz4`).
//! Compression backends may be absent from a given build; the capability
//! set is resolved once at startup and a token for a recognized but
//! unavailable algorithm fails only when it must actually run.
//!
//! ## What This Crate Does NOT Contain
//!
//! - Transport or persistence logic (queue engines and wire adapters are
//!   external collaborators)
//! - The message entity itself (lives in `types`)

pub mod compress;
pub mod encoding;
pub mod error;
pub mod object;
pub mod pipeline;

// Re-export key types for convenience
pub use compress::{available_compressions, Compression, KEEP_RATIO, MIN_COMPRESS_SIZE};
pub use encoding::EncodingToken;
pub use error::{CodecError, CodecResult};
pub use object::MessageObject;
pub use pipeline::{
    dejsonify, deserialize, destringify, jsonify, serialize, stringify, ConvertOptions,
};
