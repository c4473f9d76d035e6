//! Codec-level errors for message conversion
//!
//! Each variant carries enough context to tell apart the failure classes
//! that matter to callers: a token nobody recognizes, a token this build
//! recognizes but cannot run, and payloads that do not decode. All errors
//! surface to the immediate caller; nothing is retried and no conversion
//! leaves a partially-mutated message behind.

use thiserror::Error;

/// Conversion errors for the forward and inverse pipelines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Requested compression token is not in the recognized vocabulary.
    #[error("unsupported compression type: {name}")]
    UnsupportedCompression { name: String },

    /// Recognized compression token, but the algorithm is not compiled into
    /// this build. Distinct from [`CodecError::UnknownEncoding`]: the token
    /// is understood, the capability is missing.
    #[error("decoding supported but not available: {token}")]
    EncodingUnavailable { token: String },

    /// An `encoding` token outside the vocabulary altogether.
    #[error("decoding not supported: {token}")]
    UnknownEncoding { token: String },

    /// Structured representation is not a JSON mapping.
    #[error("mapping expected: {detail}")]
    MalformedObject { detail: String },

    /// Text is not parseable as JSON; wraps the parser diagnostic.
    #[error("not a valid json string: {detail}")]
    InvalidJson { detail: String },

    /// Payload bytes do not decode: invalid UTF-8, bad base64, or a
    /// compressed stream that fails to inflate.
    #[error("invalid payload encoding: {detail}")]
    InvalidEncoding { detail: String },
}

impl CodecError {
    pub fn unsupported_compression(name: impl Into<String>) -> Self {
        CodecError::UnsupportedCompression { name: name.into() }
    }

    pub fn encoding_unavailable(token: impl Into<String>) -> Self {
        CodecError::EncodingUnavailable {
            token: token.into(),
        }
    }

    pub fn unknown_encoding(token: impl Into<String>) -> Self {
        CodecError::UnknownEncoding {
            token: token.into(),
        }
    }

    pub fn malformed_object(detail: impl Into<String>) -> Self {
        CodecError::MalformedObject {
            detail: detail.into(),
        }
    }

    pub fn invalid_json(err: &serde_json::Error) -> Self {
        CodecError::InvalidJson {
            detail: err.to_string(),
        }
    }

    pub fn invalid_encoding(detail: impl Into<String>) -> Self {
        CodecError::InvalidEncoding {
            detail: detail.into(),
        }
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
