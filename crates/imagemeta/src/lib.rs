//! Header-only PNG dimension probe.
//!
//! Reads width and height straight from the IHDR chunk without pulling in
//! a full image decoder.
//!
//! # PNG layout
//!
//! ```text
//! [8 bytes: signature 89 50 4E 47 0D 0A 1A 0A]
//! [4 bytes BE: chunk length] [4 bytes: chunk type "IHDR"]
//! [4 bytes BE: width] [4 bytes BE: height] ...
//! ```

use std::fmt;

/// The fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

/// Minimum bytes needed to read width and height.
const MIN_HEADER_LEN: usize = 24;

/// Errors from probing an image header.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("not a PNG image")]
    NotPng,

    #[error("truncated PNG header: {0} bytes")]
    Truncated(usize),

    #[error("first chunk is not IHDR")]
    MissingIhdr,
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Reads width and height from a PNG header.
///
/// Only the signature and the IHDR chunk are inspected; the rest of the
/// data is ignored, so a byte-range prefix of the file is enough.
pub fn png_dimensions(data: &[u8]) -> Result<Dimensions, ProbeError> {
    if data.len() < PNG_SIGNATURE.len() || data[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(ProbeError::NotPng);
    }
    if data.len() < MIN_HEADER_LEN {
        return Err(ProbeError::Truncated(data.len()));
    }
    if &data[12..16] != b"IHDR" {
        return Err(ProbeError::MissingIhdr);
    }

    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Ok(Dimensions::new(width, height))
}
