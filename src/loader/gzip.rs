//! Gzip member decoding (RFC 1952)
//!
//! Explicit byte-offset parsing of the fixed gzip header and trailer around
//! a raw DEFLATE body. Every failure is recoverable: the caller falls back
//! to the next source in its resolution chain.

use flate2::read::DeflateDecoder;
use std::fmt;
use std::io::Read;

/// The 2-byte gzip magic number
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Compression method 8 = DEFLATE, the only method RFC 1952 defines
const CM_DEFLATE: u8 = 8;

// FLG bits, RFC 1952 §2.3.1
const FHCRC: u8 = 1 << 1;
const FEXTRA: u8 = 1 << 2;
const FNAME: u8 = 1 << 3;
const FCOMMENT: u8 = 1 << 4;

/// Fixed header length: magic, CM, FLG, MTIME, XFL, OS
const HEADER_LEN: usize = 10;

/// Trailer length: CRC32 + ISIZE, both little-endian
const TRAILER_LEN: usize = 8;

/// Error type for gzip decoding failures
#[derive(Debug)]
pub enum GzipError {
    BadMagic,
    UnsupportedMethod(u8),
    Truncated,
    Deflate(std::io::Error),
    CrcMismatch { expected: u32, actual: u32 },
    SizeMismatch { expected: u32, actual: u32 },
}

impl fmt::Display for GzipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "Not a gzip stream (bad magic number)"),
            Self::UnsupportedMethod(cm) => {
                write!(f, "Unsupported compression method {cm} (expected 8)")
            }
            Self::Truncated => write!(f, "Truncated gzip stream"),
            Self::Deflate(err) => write!(f, "DEFLATE decompression failed: {err}"),
            Self::CrcMismatch { expected, actual } => {
                write!(f, "CRC32 mismatch: trailer says {expected:#010x}, got {actual:#010x}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "Size mismatch: trailer says {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for GzipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Deflate(err) => Some(err),
            _ => None,
        }
    }
}

/// Check whether a byte source starts with the gzip magic number
#[inline]
#[must_use]
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[..2] == GZIP_MAGIC
}

/// Decode a single gzip member into its uncompressed bytes
///
/// Verifies the magic number and compression method, skips the optional
/// FEXTRA/FNAME/FCOMMENT/FHCRC header sections in RFC order, inflates the
/// DEFLATE body, then validates both trailer fields: the CRC32 of the
/// uncompressed data and ISIZE (uncompressed length mod 2^32).
///
/// Only the first member of a multi-member file is decoded.
///
/// # Errors
/// Returns `GzipError` on bad magic, unsupported method, truncation at any
/// offset, DEFLATE failure, or a trailer mismatch.
pub fn decode_gzip(bytes: &[u8]) -> Result<Vec<u8>, GzipError> {
    if bytes.len() < 2 {
        return Err(GzipError::Truncated);
    }
    if bytes[..2] != GZIP_MAGIC {
        return Err(GzipError::BadMagic);
    }
    if bytes.len() < HEADER_LEN + TRAILER_LEN {
        return Err(GzipError::Truncated);
    }

    let method = bytes[2];
    if method != CM_DEFLATE {
        return Err(GzipError::UnsupportedMethod(method));
    }

    let flags = bytes[3];
    // MTIME (4), XFL (1), OS (1) carry no layout information
    let mut offset = HEADER_LEN;

    if flags & FEXTRA != 0 {
        let extra_len = read_u16_le(bytes, offset)?;
        offset += 2 + usize::from(extra_len);
    }
    if flags & FNAME != 0 {
        offset = skip_nul_terminated(bytes, offset)?;
    }
    if flags & FCOMMENT != 0 {
        offset = skip_nul_terminated(bytes, offset)?;
    }
    if flags & FHCRC != 0 {
        offset += 2;
    }

    let Some(body) = bytes.get(offset..bytes.len() - TRAILER_LEN) else {
        return Err(GzipError::Truncated);
    };

    let mut decompressed = Vec::new();
    DeflateDecoder::new(body)
        .read_to_end(&mut decompressed)
        .map_err(GzipError::Deflate)?;

    let expected_crc = read_u32_le(bytes, bytes.len() - TRAILER_LEN)?;
    let actual_crc = crc32fast::hash(&decompressed);
    if expected_crc != actual_crc {
        return Err(GzipError::CrcMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    let expected_size = read_u32_le(bytes, bytes.len() - 4)?;
    let actual_size = decompressed.len() as u32;
    if expected_size != actual_size {
        return Err(GzipError::SizeMismatch {
            expected: expected_size,
            actual: actual_size,
        });
    }

    Ok(decompressed)
}

fn read_u16_le(bytes: &[u8], offset: usize) -> Result<u16, GzipError> {
    let field = bytes
        .get(offset..offset + 2)
        .ok_or(GzipError::Truncated)?;
    Ok(u16::from_le_bytes([field[0], field[1]]))
}

fn read_u32_le(bytes: &[u8], offset: usize) -> Result<u32, GzipError> {
    let field = bytes
        .get(offset..offset + 4)
        .ok_or(GzipError::Truncated)?;
    Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Skip past a NUL-terminated header field, returning the offset after the NUL
fn skip_nul_terminated(bytes: &[u8], offset: usize) -> Result<usize, GzipError> {
    bytes
        .get(offset..)
        .and_then(|tail| tail.iter().position(|&b| b == 0))
        .map(|pos| offset + pos + 1)
        .ok_or(GzipError::Truncated)
}
