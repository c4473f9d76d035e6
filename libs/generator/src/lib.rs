//! # Courier Message Generator
//!
//! A versatile generator of randomized [`Message`] instances, useful for
//! stress testing or benchmarking brokers and the codec itself — it
//! exercises every body kind and header shape the codec can meet.
//!
//! ## Quick Start
//!
//! ```rust
//! use generator::Generator;
//!
//! let mut gen = Generator::new()
//!     .with_body_content("binary")
//!     .with_body_size(1024);
//!
//! for _ in 0..10 {
//!     let msg = gen.message().unwrap();
//!     assert!(!msg.is_text());
//! }
//! ```
//!
//! All integer options can be either non-negative (meaning exactly this
//! value) or negative (meaning randomly distributed around the magnitude:
//! a draw from an approximately normal distribution on `[0, 2·|value|]`,
//! built from twelve uniform draws per Irwin–Hall).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::{thread_rng, Rng};
use thiserror::Error;
use types::{Body, Header, Message};

/// Generator failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// `body_content` is not one of `index`, `text`, `binary`, `base64`.
    #[error("invalid body content: {content}")]
    UnsupportedBodyContent { content: String },
}

impl GeneratorError {
    pub fn unsupported_body_content(content: impl Into<String>) -> Self {
        GeneratorError::UnsupportedBodyContent {
            content: content.into(),
        }
    }
}

/// Approximately normal random integer on `[0, 2·mean]`.
///
/// Twelve uniform draws summed have mean 6 and variance 1; scaling by
/// `mean / 6` centers the result on `mean` with hard bounds at 0 and
/// `2·mean`.
fn rnd_normal(mean: i64) -> i64 {
    let mut rng = thread_rng();
    let sum: f64 = (0..12).map(|_| rng.gen::<f64>()).sum();
    (sum * mean as f64 / 6.0 + 0.5) as i64
}

/// Negative sizes mean "randomize around the magnitude".
fn maybe_randomize(size: i64) -> i64 {
    if size < 0 {
        rnd_normal(-size)
    } else {
        size
    }
}

/// Random bytes of the given size.
fn rnd_bytes(size: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; size];
    thread_rng().fill(&mut bytes[..]);
    bytes
}

/// Random text of the given size over the base64 alphabet.
fn rnd_base64(size: usize) -> String {
    let mut text = BASE64.encode(rnd_bytes(size * 3 / 4 + 1));
    text.truncate(size);
    text
}

/// Random text of the given size over the printable 7-bit characters.
fn rnd_text(size: usize) -> String {
    let mut rng = thread_rng();
    (0..size).map(|_| rng.gen_range(0x20u8..0x7f) as char).collect()
}

/// A message generator.
///
/// Unset options keep their listed defaults; `body_size` and
/// `header_count` are genuinely optional (unset `body_size` produces the
/// counter body, unset `header_count` produces no header fields).
#[derive(Debug, Clone)]
pub struct Generator {
    body_content: String,
    body_size: Option<i64>,
    header_count: Option<i64>,
    header_name_size: i64,
    header_value_size: i64,
    header_name_prefix: String,
    index: u64,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            body_content: "index".to_string(),
            body_size: None,
            header_count: None,
            header_name_size: -16,
            header_value_size: -32,
            header_name_prefix: "rnd-".to_string(),
            index: 0,
        }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body content class: `index` (default), `text`, `binary` or
    /// `base64`. Validated when a message is generated.
    pub fn with_body_content(mut self, content: impl Into<String>) -> Self {
        self.body_content = content.into();
        self
    }

    pub fn with_body_size(mut self, size: i64) -> Self {
        self.body_size = Some(size);
        self
    }

    pub fn with_header_count(mut self, count: i64) -> Self {
        self.header_count = Some(count);
        self
    }

    pub fn with_header_name_size(mut self, size: i64) -> Self {
        self.header_name_size = size;
        self
    }

    pub fn with_header_value_size(mut self, size: i64) -> Self {
        self.header_value_size = size;
        self
    }

    pub fn with_header_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_name_prefix = prefix.into();
        self
    }

    /// Generate the next message.
    ///
    /// The internal counter feeding the `index` content class starts at 0
    /// and advances after every generated message.
    pub fn message(&mut self) -> Result<Message, GeneratorError> {
        if !matches!(
            self.body_content.as_str(),
            "index" | "text" | "binary" | "base64"
        ) {
            return Err(GeneratorError::unsupported_body_content(
                &self.body_content,
            ));
        }

        let body: Body = match self.body_size.map(maybe_randomize) {
            None => Body::Text(self.index.to_string()),
            Some(0) => Body::Binary(Vec::new()),
            Some(size) => {
                let size = size as usize;
                match self.body_content.as_str() {
                    "base64" => Body::Text(rnd_base64(size)),
                    "text" => Body::Text(rnd_text(size)),
                    "binary" => Body::Binary(rnd_bytes(size)),
                    // Validated above, only "index" remains.
                    _ => Body::Text(self.index.to_string()),
                }
            }
        };

        let mut header = Header::new();
        if let Some(count) = self.header_count {
            for _ in 0..maybe_randomize(count) {
                let name_size = maybe_randomize(self.header_name_size) as usize;
                let name = rnd_base64(name_size).replace('+', "-").replace('/', "_");
                let value_size = maybe_randomize(self.header_value_size) as usize;
                header.insert(
                    format!("{}{}", self.header_name_prefix, name),
                    rnd_text(value_size),
                );
            }
        }

        self.index += 1;
        Ok(Message::with_parts(header, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_body_is_the_counter() {
        let mut gen = Generator::new();
        for expected in ["0", "1", "2"] {
            let msg = gen.message().unwrap();
            assert_eq!(msg.body(), &Body::Text(expected.to_string()));
            assert!(msg.header().is_empty());
        }
    }

    #[test]
    fn counter_advances_for_every_content_class() {
        let mut gen = Generator::new().with_body_content("text").with_body_size(8);
        gen.message().unwrap();
        gen.message().unwrap();
        assert_eq!(gen.index, 2);
    }

    #[test]
    fn exact_sizes_are_exact() {
        let mut gen = Generator::new().with_body_content("text").with_body_size(100);
        let msg = gen.message().unwrap();
        assert_eq!(msg.body().len(), 100);
        assert!(msg.is_text());
    }

    #[test]
    fn zero_size_is_an_empty_binary_body() {
        let mut gen = Generator::new().with_body_content("text").with_body_size(0);
        let msg = gen.message().unwrap();
        assert_eq!(msg.body(), &Body::Binary(Vec::new()));
    }

    #[test]
    fn text_bodies_are_printable() {
        let mut gen = Generator::new().with_body_content("text").with_body_size(500);
        let msg = gen.message().unwrap();
        let Body::Text(text) = msg.body() else {
            panic!("text content class must produce a text body");
        };
        assert!(text.chars().all(|c| (' '..='~').contains(&c)));
    }

    #[test]
    fn base64_bodies_use_the_base64_alphabet() {
        let mut gen = Generator::new()
            .with_body_content("base64")
            .with_body_size(333);
        let msg = gen.message().unwrap();
        let Body::Text(text) = msg.body() else {
            panic!("base64 content class must produce a text body");
        };
        assert_eq!(text.chars().count(), 333);
        assert!(text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn binary_bodies_have_the_requested_size() {
        let mut gen = Generator::new()
            .with_body_content("binary")
            .with_body_size(2048);
        let msg = gen.message().unwrap();
        assert!(!msg.is_text());
        assert_eq!(msg.body().len(), 2048);
    }

    #[test]
    fn negative_sizes_randomize_within_twice_the_mean() {
        let mut gen = Generator::new()
            .with_body_content("text")
            .with_body_size(-64);
        for _ in 0..50 {
            let len = gen.message().unwrap().body().len();
            assert!(len <= 128, "size {len} outside [0, 128]");
        }
    }

    #[test]
    fn headers_carry_the_prefix_and_safe_names() {
        let mut gen = Generator::new()
            .with_header_count(10)
            .with_header_name_size(16)
            .with_header_value_size(32);
        let msg = gen.message().unwrap();
        // Random names may collide, but with 16-char names that is
        // vanishingly unlikely.
        assert_eq!(msg.header().len(), 10);
        for (name, value) in msg.header() {
            assert!(name.starts_with("rnd-"));
            assert!(!name.contains('+') && !name.contains('/'));
            assert_eq!(value.chars().count(), 32);
        }
    }

    #[test]
    fn unset_header_count_means_no_header() {
        let mut gen = Generator::new().with_body_content("text").with_body_size(10);
        assert!(gen.message().unwrap().header().is_empty());
    }

    #[test]
    fn unknown_body_content_fails() {
        let mut gen = Generator::new()
            .with_body_content("junk")
            .with_body_size(10);
        assert_eq!(
            gen.message(),
            Err(GeneratorError::unsupported_body_content("junk"))
        );
    }
}
