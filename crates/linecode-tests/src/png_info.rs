//! PNG header inspection for plot outputs.

use std::fmt;

/// Information extracted from a PNG IHDR chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bit depth (1, 2, 4, 8, or 16).
    pub bit_depth: u8,
    /// Color type (0=grayscale, 2=RGB, 3=indexed, 4=grayscale+alpha, 6=RGBA).
    pub color_type: u8,
    /// Interlace method (0 = none, 1 = Adam7).
    pub interlace_method: u8,
}

impl PngInfo {
    /// True for 8-bit RGBA, the only layout the plot backend writes.
    pub fn is_rgba8(&self) -> bool {
        self.color_type == 6 && self.bit_depth == 8
    }
}

/// Error returned when bytes are not a well-formed PNG header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngFormatError {
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset where the error occurred, if applicable.
    pub offset: Option<usize>,
}

impl PngFormatError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
        }
    }

    fn at_offset(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for PngFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "PNG error at offset {}: {}", offset, self.message),
            None => write!(f, "PNG error: {}", self.message),
        }
    }
}

impl std::error::Error for PngFormatError {}

/// Parses the PNG signature and IHDR chunk.
pub fn read_png_info(data: &[u8]) -> Result<PngInfo, PngFormatError> {
    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    const MIN_HEADER_SIZE: usize = 8 + 8 + 13; // signature + chunk header + IHDR data

    if data.len() < MIN_HEADER_SIZE {
        return Err(PngFormatError::new(format!(
            "file too short: {} bytes (minimum {} required)",
            data.len(),
            MIN_HEADER_SIZE
        )));
    }

    if data[0..8] != PNG_SIGNATURE {
        return Err(PngFormatError::at_offset("invalid PNG signature", 0));
    }

    let chunk_length = u32::from_be_bytes([data[8], data[9], data[10], data[11]]) as usize;
    if &data[12..16] != b"IHDR" {
        return Err(PngFormatError::at_offset("first chunk must be IHDR", 12));
    }
    if chunk_length != 13 {
        return Err(PngFormatError::at_offset(
            format!("IHDR chunk must be 13 bytes, got {}", chunk_length),
            8,
        ));
    }

    let ihdr = &data[16..29];
    let width = u32::from_be_bytes([ihdr[0], ihdr[1], ihdr[2], ihdr[3]]);
    let height = u32::from_be_bytes([ihdr[4], ihdr[5], ihdr[6], ihdr[7]]);
    if width == 0 || height == 0 {
        return Err(PngFormatError::new(format!(
            "invalid dimensions: {}x{}",
            width, height
        )));
    }

    Ok(PngInfo {
        width,
        height,
        bit_depth: ihdr[8],
        color_type: ihdr[9],
        interlace_method: ihdr[12],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_input() {
        let err = read_png_info(&[0x89, b'P']).unwrap_err();
        assert!(err.message.contains("too short"));
    }

    #[test]
    fn test_rejects_bad_signature() {
        let err = read_png_info(&[0u8; 64]).unwrap_err();
        assert_eq!(err.offset, Some(0));
    }
}
