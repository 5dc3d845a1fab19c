//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same canvas always encodes to the
//! same bytes.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::canvas::Canvas;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Fixed for determinism.
    pub compression: Compression,
    /// Row filter. Fixed for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a canvas as RGBA PNG to any writer.
pub fn write_rgba_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "canvas must be at least 1x1, got {}x{}",
            canvas.width, canvas.height
        )));
    }

    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // No tIME or text chunks are written, so output depends only on pixels.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgba8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn write_rgba_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::surface::DrawingSurface;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn striped_canvas() -> Canvas {
        let mut canvas = Canvas::new(32, 16, Color::white());
        canvas.set_stroke_color(Color::from_rgb8([0x00, 0x7a, 0xcc]));
        canvas.set_line_width(2.0);
        canvas.begin_path();
        canvas.move_to(0.0, 4.0);
        canvas.line_to(16.0, 4.0);
        canvas.line_to(16.0, 12.0);
        canvas.line_to(32.0, 12.0);
        canvas.stroke();
        canvas
    }

    #[test]
    fn test_png_magic() {
        let (data, hash) = write_rgba_to_vec_with_hash(&striped_canvas(), &PngConfig::default())
            .unwrap();
        assert_eq!(&data[..8], &PNG_MAGIC);
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_rgba_deterministic() {
        let config = PngConfig::default();
        let (data1, hash1) = write_rgba_to_vec_with_hash(&striped_canvas(), &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&striped_canvas(), &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_empty_canvas_rejected() {
        let canvas = Canvas::new(0, 10, Color::white());
        let err = write_rgba_to_vec_with_hash(&canvas, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions(_)));
    }
}
