//! Encoding tokens and byte-level primitives
//!
//! The `encoding` field of a structured message is a `+`-joined list of
//! tokens recording, in application order, the transforms applied to the
//! raw body before it was placed in the JSON `body` string.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::compress::Compression;
use crate::error::{CodecError, CodecResult};

/// One entry of an encoding chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingToken {
    /// Standard-alphabet base64 with padding.
    Base64,
    /// UTF-8 encoding of a text body, applied before compression.
    Utf8,
    /// A compression algorithm from the fixed vocabulary.
    Compressed(Compression),
}

impl EncodingToken {
    pub fn token(&self) -> &'static str {
        match self {
            EncodingToken::Base64 => "base64",
            EncodingToken::Utf8 => "utf8",
            EncodingToken::Compressed(alg) => alg.token(),
        }
    }

    /// Resolve a token from an `encoding` field. Tokens outside the
    /// vocabulary are an [`CodecError::UnknownEncoding`] failure; whether a
    /// compression backend is actually present is checked separately.
    pub fn from_token(token: &str) -> CodecResult<Self> {
        match token {
            "base64" => Ok(EncodingToken::Base64),
            "utf8" => Ok(EncodingToken::Utf8),
            other => Compression::from_token(other)
                .map(EncodingToken::Compressed)
                .map_err(|_| CodecError::unknown_encoding(other)),
        }
    }
}

/// Render an encoding chain as the `+`-joined wire form.
pub(crate) fn join_tokens(tokens: &[EncodingToken]) -> String {
    tokens
        .iter()
        .map(EncodingToken::token)
        .collect::<Vec<_>>()
        .join("+")
}

pub(crate) fn base64_encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

pub(crate) fn base64_decode(data: &[u8]) -> CodecResult<Vec<u8>> {
    BASE64
        .decode(data)
        .map_err(|e| CodecError::invalid_encoding(format!("base64 body: {e}")))
}

/// Whether a text body needs an explicit UTF-8 step before compression.
///
/// The test is a fixed character-range check shared with other
/// implementations: anything outside the printable low range (below U+0020
/// or at/above U+007F) forces the step. Pure printable-ASCII text skips it,
/// since its UTF-8 encoding is the text itself.
pub(crate) fn needs_utf8_step(text: &str) -> bool {
    text.chars().any(|c| c < '\x20' || c >= '\x7f')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trips() {
        let data = b"\x00\x01\xfe\xffbinary";
        let encoded = base64_encode(data);
        assert_eq!(base64_decode(encoded.as_bytes()).unwrap(), data);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        assert!(matches!(
            base64_decode(b"not valid base64!!"),
            Err(CodecError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn token_vocabulary() {
        assert_eq!(
            EncodingToken::from_token("base64").unwrap(),
            EncodingToken::Base64
        );
        assert_eq!(
            EncodingToken::from_token("utf8").unwrap(),
            EncodingToken::Utf8
        );
        assert_eq!(
            EncodingToken::from_token("zlib").unwrap(),
            EncodingToken::Compressed(Compression::Zlib)
        );
        assert_eq!(
            EncodingToken::from_token("gzip"),
            Err(CodecError::unknown_encoding("gzip"))
        );
    }

    #[test]
    fn chain_rendering() {
        let chain = [
            EncodingToken::Utf8,
            EncodingToken::Compressed(Compression::Zlib),
            EncodingToken::Base64,
        ];
        assert_eq!(join_tokens(&chain), "utf8+zlib+base64");
    }

    #[test]
    fn printable_ascii_skips_utf8_step() {
        assert!(!needs_utf8_step("hello world! ~"));
        assert!(needs_utf8_step("héllo"));
        assert!(needs_utf8_step("tab\there"));
        assert!(needs_utf8_step("del\x7f"));
    }
}
