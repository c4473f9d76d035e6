//! Compression backends and the keep-or-discard policy
//!
//! The algorithm vocabulary is fixed so that encoding tokens mean the same
//! thing to every implementation, but any backend other than zlib may be
//! absent from a given build. Availability is resolved once at process
//! start and read-only afterwards; it is consulted when an encoded message
//! is decoded (the producer may have been a fuller build) and when a
//! requested compression actually runs.

use std::io::{Read, Write};

use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::{CodecError, CodecResult};

/// Bodies shorter than this are never compressed; the overhead outweighs
/// any gain below this size.
pub const MIN_COMPRESS_SIZE: usize = 255;

/// A compression attempt is kept only when the result is smaller than this
/// fraction of the original.
pub const KEEP_RATIO: f64 = 0.9;

/// The fixed compression-algorithm vocabulary.
///
/// Wire formats match the reference implementations: `zlib` is an RFC 1950
/// stream, `snappy` the raw block format, `lz4` the block format with a
/// little-endian uncompressed-size prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    Lz4,
    Snappy,
    Zlib,
}

impl Compression {
    /// All recognized algorithms, in the order inverse transforms are
    /// applied during decode.
    pub const ALL: [Compression; 3] = [Compression::Lz4, Compression::Snappy, Compression::Zlib];

    /// The encoding token naming this algorithm.
    pub fn token(&self) -> &'static str {
        match self {
            Compression::Lz4 => "lz4",
            Compression::Snappy => "snappy",
            Compression::Zlib => "zlib",
        }
    }

    /// Resolve a requested token against the vocabulary.
    pub fn from_token(name: &str) -> CodecResult<Self> {
        match name {
            "lz4" => Ok(Compression::Lz4),
            "snappy" => Ok(Compression::Snappy),
            "zlib" => Ok(Compression::Zlib),
            other => Err(CodecError::unsupported_compression(other)),
        }
    }

    /// Whether this algorithm is compiled into the running build.
    pub fn is_available(&self) -> bool {
        match self {
            Compression::Zlib => true,
            Compression::Snappy => cfg!(feature = "snappy"),
            Compression::Lz4 => cfg!(feature = "lz4"),
        }
    }

    pub fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        match self {
            Compression::Zlib => {
                let mut encoder = flate2::write::ZlibEncoder::new(
                    Vec::with_capacity(data.len() / 2),
                    flate2::Compression::default(),
                );
                encoder
                    .write_all(data)
                    .map_err(|e| CodecError::invalid_encoding(format!("zlib compress: {e}")))?;
                encoder
                    .finish()
                    .map_err(|e| CodecError::invalid_encoding(format!("zlib compress: {e}")))
            }
            #[cfg(feature = "snappy")]
            Compression::Snappy => snap::raw::Encoder::new()
                .compress_vec(data)
                .map_err(|e| CodecError::invalid_encoding(format!("snappy compress: {e}"))),
            #[cfg(feature = "lz4")]
            Compression::Lz4 => Ok(lz4_flex::block::compress_prepend_size(data)),
            #[allow(unreachable_patterns)]
            other => Err(CodecError::encoding_unavailable(other.token())),
        }
    }

    pub fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        match self {
            Compression::Zlib => {
                let mut decoder = flate2::read::ZlibDecoder::new(data);
                let mut out = Vec::new();
                decoder
                    .read_to_end(&mut out)
                    .map_err(|e| CodecError::invalid_encoding(format!("zlib decompress: {e}")))?;
                Ok(out)
            }
            #[cfg(feature = "snappy")]
            Compression::Snappy => snap::raw::Decoder::new()
                .decompress_vec(data)
                .map_err(|e| CodecError::invalid_encoding(format!("snappy decompress: {e}"))),
            #[cfg(feature = "lz4")]
            Compression::Lz4 => lz4_flex::block::decompress_size_prepended(data)
                .map_err(|e| CodecError::invalid_encoding(format!("lz4 decompress: {e}"))),
            #[allow(unreachable_patterns)]
            other => Err(CodecError::encoding_unavailable(other.token())),
        }
    }
}

/// Tokens of the algorithms compiled into this build, resolved once.
static AVAILABLE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    Compression::ALL
        .iter()
        .filter(|alg| alg.is_available())
        .map(|alg| alg.token())
        .collect()
});

/// The compression tokens available in the running build.
pub fn available_compressions() -> &'static [&'static str] {
    &AVAILABLE
}

/// Run a compression attempt under the size and effectiveness policy.
///
/// Returns `Ok(None)` when the attempt is skipped (payload below
/// [`MIN_COMPRESS_SIZE`]) or discarded (result not below [`KEEP_RATIO`] of
/// the original). An unavailable algorithm only fails here, at actual use.
pub(crate) fn compress_if_worthwhile(
    alg: Compression,
    data: &[u8],
) -> CodecResult<Option<Vec<u8>>> {
    if data.len() < MIN_COMPRESS_SIZE {
        return Ok(None);
    }
    let compressed = alg.compress(data)?;
    if (compressed.len() as f64) < data.len() as f64 * KEEP_RATIO {
        trace!(
            algorithm = alg.token(),
            original = data.len(),
            compressed = compressed.len(),
            "compression kept"
        );
        Ok(Some(compressed))
    } else {
        trace!(
            algorithm = alg.token(),
            original = data.len(),
            compressed = compressed.len(),
            "compression discarded, not worth it"
        );
        Ok(None)
    }
}
