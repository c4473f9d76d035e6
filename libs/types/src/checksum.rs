//! Canonical message checksum
//!
//! A message's checksum is a cross-implementation identity fingerprint: any
//! conformant implementation, in any language, must produce the same 32
//! lowercase hex characters for the same message. Header and body are
//! digested separately so either can be verified on its own, then the two
//! digests are combined with the text flag and digested once more.

use md5::{Digest, Md5};

use crate::message::{Body, Message};

/// Lowercase hex MD5 of the given bytes.
fn digest_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

impl Message {
    /// The canonical checksum of the message.
    ///
    /// Construction, which must not change:
    /// 1. sort header keys byte-wise on their UTF-8 encoding;
    /// 2. canonical header string: `key:value\n` per sorted key;
    /// 3. digest the header string, digest the body (UTF-8 encoding for a
    ///    text body, raw bytes for binary), both as lowercase hex;
    /// 4. digest `<0|1><header_digest><body_digest>` where the leading
    ///    character is `1` for a text body.
    pub fn checksum(&self) -> String {
        let mut keys: Vec<&String> = self.header().keys().collect();
        keys.sort_unstable();
        let mut canonical = String::new();
        for key in keys {
            canonical.push_str(key);
            canonical.push(':');
            canonical.push_str(&self.header()[key]);
            canonical.push('\n');
        }
        let header_digest = digest_hex(canonical.as_bytes());
        let body_digest = match self.body() {
            Body::Text(text) => digest_hex(text.as_bytes()),
            Body::Binary(bytes) => digest_hex(bytes),
        };
        let composed = format!(
            "{}{}{}",
            u8::from(self.is_text()),
            header_digest,
            body_digest
        );
        digest_hex(composed.as_bytes())
    }
}
