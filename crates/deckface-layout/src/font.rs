//! Font metrics and glyph painting.
//!
//! Measurement is a pure function of (face, DPI, point size, text). String
//! height is the ink bounding box of the rendered text, not the font's
//! nominal line height: nominal metrics overestimate badly for the short
//! alphanumeric/percentage strings this engine draws.

use std::sync::Arc;

use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Color;

/// Errors from font loading.
#[derive(Debug, Error)]
pub enum FontError {
    /// The byte buffer could not be parsed as a font.
    #[error("failed to parse font: {0}")]
    Parse(&'static str),
}

/// A loaded font face, cheaply clonable.
///
/// Every layout/render call receives an explicit `FontFace`; the engine
/// keeps no process-wide font state. Measurement methods take `&self`, so
/// a face may be shared across parallel renders.
#[derive(Debug, Clone)]
pub struct FontFace {
    inner: Arc<fontdue::Font>,
}

impl FontFace {
    /// Parse a font from raw TTF/OTF bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(FontError::Parse)?;
        Ok(Self {
            inner: Arc::new(font),
        })
    }

    fn as_font(&self) -> &fontdue::Font {
        &self.inner
    }
}

/// Ink bounding box of a string: `height = ascent + descent`, both
/// measured from the baseline in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtents {
    pub height: u32,
    pub ascent: u32,
    pub descent: u32,
}

/// Convert a point size to a pixel size for the given DPI.
#[inline]
pub(crate) fn point_size_to_px(point_size: f32, dpi: u32) -> f32 {
    point_size * dpi as f32 / 72.0
}

/// Measure the rendered pixel width of `text` at the given point size.
pub fn string_width(face: &FontFace, dpi: u32, point_size: f32, text: &str) -> u32 {
    let px = point_size_to_px(point_size, dpi);
    let mut width = 0.0f32;
    for c in text.chars() {
        width += face.as_font().metrics(c, px).advance_width;
    }
    width.ceil() as u32
}

/// Measure the ink bounding box of `text` at the given point size.
pub fn string_height(face: &FontFace, dpi: u32, point_size: f32, text: &str) -> TextExtents {
    let px = point_size_to_px(point_size, dpi);
    let mut max_above = 0i32;
    let mut min_below = 0i32;

    for c in text.chars() {
        let metrics = face.as_font().metrics(c, px);
        if metrics.width == 0 || metrics.height == 0 {
            continue;
        }
        // ymin is the bitmap's bottom edge relative to the baseline.
        let top = metrics.ymin + metrics.height as i32;
        max_above = max_above.max(top);
        min_below = min_below.min(metrics.ymin);
    }

    let ascent = max_above.max(0) as u32;
    let descent = (-min_below).max(0) as u32;
    TextExtents {
        height: ascent + descent,
        ascent,
        descent,
    }
}

/// Rasterize `text` onto `canvas` with the pen at `(x, baseline_y)`,
/// alpha-blending glyph coverage in the foreground color. Pixels outside
/// the canvas are clipped.
pub(crate) fn draw_string(
    canvas: &mut Canvas,
    face: &FontFace,
    dpi: u32,
    point_size: f32,
    text: &str,
    color: Color,
    x: i64,
    baseline_y: i64,
) {
    let px = point_size_to_px(point_size, dpi);
    let mut cursor = x as f32;

    for c in text.chars() {
        let (metrics, bitmap) = face.as_font().rasterize(c, px);

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let coverage = bitmap[gy * metrics.width + gx];
                if coverage == 0 {
                    continue;
                }
                let tx = cursor.round() as i64 + metrics.xmin as i64 + gx as i64;
                let ty = baseline_y - (metrics.ymin + metrics.height as i32) as i64 + gy as i64;
                canvas.blend(tx, ty, color.with_alpha_scaled(coverage as f64 / 255.0));
            }
        }

        cursor += metrics.advance_width;
    }
}
