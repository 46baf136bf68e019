//! Compression tags and the payload decompressor.
//!
//! # Framing
//! DEFLATE payloads are stored as zlib streams (2-byte header, RFC 1951
//! blocks, Adler-32 trailer).  Existing containers depend on this; a switch
//! to headerless DEFLATE would need a format version bump.
//!
//! # Sizes
//! The output buffer is sized from the info header's `uncomp_size`.  A stream
//! that decodes to *more* bytes than that is rejected.  A stream that decodes
//! to *fewer* bytes is returned as produced, with a warning.

use std::io::Read;

use flate2::read::ZlibDecoder;
use serde::Serialize;

use crate::error::RresError;

/// On-disk compression tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CompressionType {
    None    = 0,
    Deflate = 1,
    Lz4     = 2,
    Lzma    = 3,
}

impl CompressionType {
    pub fn name(self) -> &'static str {
        match self {
            CompressionType::None    => "none",
            CompressionType::Deflate => "deflate",
            CompressionType::Lz4     => "lz4",
            CompressionType::Lzma    => "lzma",
        }
    }

    /// Whether this build can decode the tag.  LZ4 and LZMA are reserved.
    pub fn is_supported(self) -> bool {
        matches!(self, CompressionType::None | CompressionType::Deflate)
    }
}

impl TryFrom<u8> for CompressionType {
    type Error = RresError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(CompressionType::None),
            1 => Ok(CompressionType::Deflate),
            2 => Ok(CompressionType::Lz4),
            3 => Ok(CompressionType::Lzma),
            _ => Err(RresError::UnsupportedCompression(v)),
        }
    }
}

pub trait Decompressor {
    fn compression(&self) -> CompressionType;
    /// Turn a stored payload into its decoded bytes.
    fn decompress(&self, payload: Vec<u8>, expected_size: u32) -> Result<Vec<u8>, RresError>;
}

/// Payload stored verbatim.
pub struct Stored;
impl Decompressor for Stored {
    fn compression(&self) -> CompressionType { CompressionType::None }
    fn decompress(&self, payload: Vec<u8>, _: u32) -> Result<Vec<u8>, RresError> { Ok(payload) }
}

/// zlib-framed DEFLATE.
pub struct Deflate;
impl Decompressor for Deflate {
    fn compression(&self) -> CompressionType { CompressionType::Deflate }

    fn decompress(&self, payload: Vec<u8>, expected_size: u32) -> Result<Vec<u8>, RresError> {
        inflate(&payload, expected_size)
    }
}

/// Resolve a compression tag to a decompressor.
///
/// Reserved tags fail hard: handing still-compressed bytes to the caller
/// would look like a successful load.
pub fn get_decompressor(comp: CompressionType) -> Result<Box<dyn Decompressor>, RresError> {
    match comp {
        CompressionType::None    => Ok(Box::new(Stored)),
        CompressionType::Deflate => Ok(Box::new(Deflate)),
        CompressionType::Lz4 | CompressionType::Lzma => {
            Err(RresError::UnsupportedCompression(comp as u8))
        }
    }
}

/// Decode a zlib-framed DEFLATE stream into a buffer of `expected_size` bytes.
pub fn inflate(compressed: &[u8], expected_size: u32) -> Result<Vec<u8>, RresError> {
    let expected = expected_size as usize;

    let mut out = Vec::new();
    if out.try_reserve_exact(expected).is_err() {
        log::warn!("Out of memory while decompressing data");
        return Err(RresError::OutOfMemory { size: expected_size as u64 });
    }

    // One byte of headroom so an over-long stream is detected, not truncated.
    let mut decoder = ZlibDecoder::new(compressed).take(expected_size as u64 + 1);
    if let Err(e) = decoder.read_to_end(&mut out) {
        log::warn!("Data decompression failed");
        return Err(RresError::DecompressionFailed(e.to_string()));
    }
    if out.len() > expected {
        log::warn!("Data decompression failed");
        return Err(RresError::DecompressionFailed(format!(
            "stream decodes past the expected {expected_size} bytes"
        )));
    }

    if out.len() != expected {
        log::warn!("Expected uncompressed size do not match, data may be corrupted");
        log::warn!(" -- Expected uncompressed size: {}", expected_size);
        log::warn!(" -- Returned uncompressed size: {}", out.len());
    }

    log::info!(
        "Data decompressed successfully from {} bytes to {} bytes",
        compressed.len(),
        out.len()
    );
    Ok(out)
}
