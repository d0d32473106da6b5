//! Drawable segment variants.
//!
//! A segment is one drawable unit inside an element's vertical stack:
//! an icon, a text run, a percentage bar, or a blank spacer. Each variant
//! knows how to paint itself into its allotted band of the element's
//! canvas.

use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::fit::{max_fitting_font_size, FittedText};
use crate::font::{draw_string, string_height, string_width, FontFace};

/// Bright fill color of a percentage bar.
const BAR_FILL: Color = Color::white();
/// Dim track color for the unfilled remainder.
const BAR_TRACK: Color = Color::gray(0.5);

/// Errors from drawing a single segment. These are not fatal to the
/// surrounding element: the failing segment is skipped and logged.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Text shaping produced no drawable glyphs (e.g. the face covers
    /// none of the characters).
    #[error("text shaping produced no drawable glyphs for {0:?}")]
    NoGlyphs(String),
}

/// Horizontal alignment of a text segment within its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Left edge of the band.
    Start,
    /// Centered on the band width.
    #[default]
    Center,
    /// Right edge of the band.
    End,
}

/// A text run with its face, color and placement options.
#[derive(Debug, Clone)]
pub struct TextSegment {
    pub text: String,
    pub face: FontFace,
    /// Point size; any value <= 0.0 requests auto-fit against the band.
    pub point_size: f32,
    pub color: Color,
    pub align: HorizontalAlign,
    pub center_vertically: bool,
}

/// One drawable unit in an element's vertical stack.
#[derive(Debug, Clone)]
pub enum Segment {
    /// A source bitmap, scaled to fit its band and centered.
    Icon(Canvas),
    /// A single line of text, font-fitted unless a fixed size is given.
    Text(TextSegment),
    /// A fill proportion in [0, 100].
    PercentageBar(u8),
    /// Reserves a band, paints nothing.
    Blank,
}

/// A segment's allotted horizontal strip within its element's canvas.
/// Bands always span the element's full width, so only the vertical
/// offset varies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Band {
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Segment {
    /// Paint this segment into its band of `target` (the element's own
    /// canvas). `dpi` only matters for text.
    pub(crate) fn draw(&self, target: &mut Canvas, band: Band, dpi: u32) -> Result<(), SegmentError> {
        match self {
            Segment::Icon(icon) => draw_icon(target, band, icon),
            Segment::Text(text) => draw_text(target, band, dpi, text),
            Segment::PercentageBar(pct) => draw_percentage_bar(target, band, *pct),
            Segment::Blank => Ok(()),
        }
    }
}

fn draw_icon(target: &mut Canvas, band: Band, icon: &Canvas) -> Result<(), SegmentError> {
    let size = band.width.min(band.height);
    if size == 0 {
        return Ok(());
    }

    let scaled = icon.resize_to_fit(size);
    let x = (band.width - scaled.width.min(band.width)) / 2;
    let y = band.y + (band.height - scaled.height.min(band.height)) / 2;
    target.blit(&scaled, x as i64, y as i64);
    Ok(())
}

fn draw_text(
    target: &mut Canvas,
    band: Band,
    dpi: u32,
    segment: &TextSegment,
) -> Result<(), SegmentError> {
    if segment.text.is_empty() {
        return Ok(());
    }

    // Auto-fit only when no usable fixed size was supplied.
    let fitted = if segment.point_size > 0.0 {
        let extents = string_height(&segment.face, dpi, segment.point_size, &segment.text);
        FittedText {
            point_size: segment.point_size,
            width: string_width(&segment.face, dpi, segment.point_size, &segment.text),
            ascent: extents.ascent,
            descent: extents.descent,
        }
    } else {
        max_fitting_font_size(&segment.face, dpi, band.width, band.height, &segment.text)
    };

    if fitted.width == 0 || fitted.ascent + fitted.descent == 0 {
        return Err(SegmentError::NoGlyphs(segment.text.clone()));
    }

    let x = match segment.align {
        HorizontalAlign::Start => 0,
        HorizontalAlign::Center => (band.width as i64 - fitted.width as i64) / 2,
        HorizontalAlign::End => band.width as i64 - fitted.width as i64,
    };

    let baseline_y = if segment.center_vertically {
        let ink_height = (fitted.ascent + fitted.descent) as i64;
        band.y as i64 + (band.height as i64 - ink_height) / 2 + fitted.ascent as i64
    } else {
        (band.y + band.height) as i64 - fitted.descent as i64
    };

    draw_string(
        target,
        &segment.face,
        dpi,
        fitted.point_size,
        &segment.text,
        segment.color,
        x,
        baseline_y,
    );
    Ok(())
}

fn draw_percentage_bar(target: &mut Canvas, band: Band, percentage: u8) -> Result<(), SegmentError> {
    let filled = ((band.width as f64 / 100.0) * percentage as f64) as u32;
    let filled = filled.min(band.width);

    for x in 0..filled {
        for y in 0..band.height {
            target.set(x, band.y + y, BAR_FILL);
        }
    }

    // Thinner track for the remainder: two-thirds thickness, centered.
    let thin = band.height - band.height / 3;
    let y_offset = (band.height - thin) / 2;
    for x in filled..band.width {
        for y in 0..thin {
            target.set(x, band.y + y_offset + y, BAR_TRACK);
        }
    }

    Ok(())
}
