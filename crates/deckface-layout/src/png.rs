//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same canvas always encodes to
//! byte-identical output, which lets callers hash rendered images and
//! cache by content.

use std::io::Write;
use std::path::Path;

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
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            // Adaptive filtering is deterministic too, but NoFilter keeps
            // the byte stream independent of encoder heuristics.
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Config optimized for file size (slower, still deterministic).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }
}

/// Write a canvas to a PNG file.
pub fn write_rgba(canvas: &Canvas, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(canvas, writer, config)
}

/// Write a canvas to any writer.
pub fn write_rgba_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgba8())?;
    Ok(())
}

/// Compute the BLAKE3 hash of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a Vec<u8> and return it with its hash.
pub fn write_rgba_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
