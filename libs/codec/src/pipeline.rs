//! The four-stage conversion pipeline
//!
//! Forward: [`jsonify`] → [`stringify`] → [`serialize`]; inverse:
//! [`dejsonify`] ← [`destringify`] ← [`deserialize`]. Each stage is
//! independently callable and strictly layered on the previous one.
//!
//! The encode side applies body transforms in the order utf8 (when
//! needed), compression (when requested and worthwhile), base64 (whenever
//! anything binary must land in a JSON string). The decode side therefore
//! runs the inverses in the fixed order base64, decompression, utf8 — the
//! recorded token order never changes it.

use std::borrow::Cow;

use types::{Body, Header, Message};

use crate::compress::{self, Compression};
use crate::encoding::{base64_decode, base64_encode, join_tokens, needs_utf8_step, EncodingToken};
use crate::error::{CodecError, CodecResult};
use crate::object::MessageObject;

/// Options for the forward conversions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Compression token to attempt on the body (`zlib`, `snappy`, `lz4`).
    pub compression: Option<String>,
}

impl ConvertOptions {
    /// No compression requested.
    pub fn none() -> Self {
        Self::default()
    }

    /// Request the named compression algorithm.
    pub fn compression(name: impl Into<String>) -> Self {
        Self {
            compression: Some(name.into()),
        }
    }
}

/// Transform a message into its structured representation.
///
/// An empty body yields an object with at most the `header` field. A text
/// body without compression is placed verbatim. Otherwise an encoding
/// chain is built; a compression attempt that is skipped or not worth it
/// rolls the chain back entirely and the body goes in untouched.
pub fn jsonify(message: &Message, options: &ConvertOptions) -> CodecResult<MessageObject> {
    let compression = options
        .compression
        .as_deref()
        .map(Compression::from_token)
        .transpose()?;

    let mut obj = MessageObject::default();
    if !message.header().is_empty() {
        obj.header = Some(message.header().clone());
    }
    if message.body().is_empty() {
        return Ok(obj);
    }

    match message.body() {
        Body::Text(text) => {
            obj.text = Some(true);
            let Some(alg) = compression else {
                obj.body = Some(text.clone());
                return Ok(obj);
            };
            let mut tokens = Vec::with_capacity(3);
            if needs_utf8_step(text) {
                tokens.push(EncodingToken::Utf8);
            }
            match compress::compress_if_worthwhile(alg, text.as_bytes())? {
                Some(compressed) => {
                    tokens.push(EncodingToken::Compressed(alg));
                    // Compressed bytes are not JSON-string-safe.
                    tokens.push(EncodingToken::Base64);
                    obj.body = Some(base64_encode(&compressed));
                    obj.encoding = Some(join_tokens(&tokens));
                }
                None => {
                    // Rollback, including any utf8 step: the original text
                    // goes in unmodified with no encoding field at all.
                    obj.body = Some(text.clone());
                }
            }
        }
        Body::Binary(bytes) => {
            let mut tokens = Vec::with_capacity(2);
            let mut payload = Cow::Borrowed(bytes.as_slice());
            if let Some(alg) = compression {
                if let Some(compressed) = compress::compress_if_worthwhile(alg, bytes)? {
                    tokens.push(EncodingToken::Compressed(alg));
                    payload = Cow::Owned(compressed);
                }
            }
            // A binary body can never sit directly in a JSON string.
            tokens.push(EncodingToken::Base64);
            obj.body = Some(base64_encode(&payload));
            obj.encoding = Some(join_tokens(&tokens));
        }
    }
    Ok(obj)
}

/// Body payload mid-decode: JSON hands us text, inverse transforms work on
/// bytes.
enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

/// Rebuild a message from its structured representation.
pub fn dejsonify(obj: &MessageObject) -> CodecResult<Message> {
    let is_text = obj.text.unwrap_or(false);
    let header: Header = obj.header.clone().unwrap_or_default();

    let tokens: Vec<EncodingToken> = match obj.encoding.as_deref() {
        Some(chain) if !chain.is_empty() => chain
            .split('+')
            .map(EncodingToken::from_token)
            .collect::<CodecResult<_>>()?,
        _ => Vec::new(),
    };
    for token in &tokens {
        if let EncodingToken::Compressed(alg) = token {
            if !alg.is_available() {
                return Err(CodecError::encoding_unavailable(alg.token()));
            }
        }
    }

    let decoded = if tokens.is_empty() {
        match &obj.body {
            Some(body) => Payload::Text(body.clone()),
            None => Payload::Bytes(Vec::new()),
        }
    } else {
        let mut bytes = obj
            .body
            .as_ref()
            .map(|body| body.clone().into_bytes())
            .unwrap_or_default();
        // Fixed inverse order, independent of the recorded token order:
        // base64 was applied last on the way in, so it comes off first.
        if tokens.contains(&EncodingToken::Base64) {
            bytes = base64_decode(&bytes)?;
        }
        for alg in Compression::ALL {
            if tokens.contains(&EncodingToken::Compressed(alg)) {
                bytes = alg.decompress(&bytes)?;
            }
        }
        if tokens.contains(&EncodingToken::Utf8) {
            Payload::Text(String::from_utf8(bytes).map_err(|e| {
                CodecError::invalid_encoding(format!("utf8 body: {e}"))
            })?)
        } else {
            Payload::Bytes(bytes)
        }
    };

    // Reconcile the decoded payload with the requested textness.
    let body = match (decoded, is_text) {
        (Payload::Text(text), true) => Body::Text(text),
        (Payload::Text(text), false) => Body::Binary(text.into_bytes()),
        (Payload::Bytes(bytes), true) => Body::Text(String::from_utf8(bytes).map_err(|e| {
            CodecError::invalid_encoding(format!("utf8 body: {e}"))
        })?),
        (Payload::Bytes(bytes), false) => Body::Binary(bytes),
    };
    Ok(Message::with_parts(header, body))
}

/// Transform a message into a single JSON text string.
pub fn stringify(message: &Message, options: &ConvertOptions) -> CodecResult<String> {
    let obj = jsonify(message, options)?;
    serde_json::to_string(&obj).map_err(|e| CodecError::invalid_json(&e))
}

/// Parse a JSON text string back into a message.
pub fn destringify(text: &str) -> CodecResult<Message> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| CodecError::invalid_json(&e))?;
    let obj = MessageObject::from_value(&value)?;
    dejsonify(&obj)
}

/// Transform a message into its UTF-8 binary form.
pub fn serialize(message: &Message, options: &ConvertOptions) -> CodecResult<Vec<u8>> {
    Ok(stringify(message, options)?.into_bytes())
}

/// Decode a binary form back into a message.
pub fn deserialize(data: &[u8]) -> CodecResult<Message> {
    let text = std::str::from_utf8(data)
        .map_err(|e| CodecError::invalid_encoding(format!("not a valid binary string: {e}")))?;
    destringify(text)
}
