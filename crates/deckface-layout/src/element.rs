//! Vertical stacks of segments.
//!
//! An element owns an ordered list of segments and divides its assigned
//! rectangle into equal horizontal bands, one per segment, separated by
//! proportional spacing. Each element composes into its own transparent
//! sub-canvas which is then pasted onto the parent canvas, so a segment
//! can never paint outside its element's rectangle.

use log::warn;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::font::FontFace;
use crate::segment::{Band, HorizontalAlign, Segment, TextSegment};

/// Minimum spacing in pixels between adjacent bands.
const MIN_SPACING: u32 = 5;

/// An ordered vertical stack of segments sharing one rectangle.
#[derive(Debug, Clone)]
pub struct Element {
    segments: Vec<Segment>,
    dpi: u32,
}

impl Element {
    /// Create an empty element. `dpi` applies to all text segments.
    pub fn new(dpi: u32) -> Self {
        Self {
            segments: Vec::new(),
            dpi,
        }
    }

    /// Append an icon segment.
    pub fn add_icon(&mut self, icon: Canvas) {
        self.segments.push(Segment::Icon(icon));
    }

    /// Append an auto-fitted, centered text segment.
    pub fn add_text(&mut self, text: impl Into<String>, face: FontFace, color: Color) {
        self.segments.push(Segment::Text(TextSegment {
            text: text.into(),
            face,
            point_size: 0.0,
            color,
            align: HorizontalAlign::Center,
            center_vertically: false,
        }));
    }

    /// Append a text segment with full placement control.
    pub fn add_text_segment(&mut self, segment: TextSegment) {
        self.segments.push(Segment::Text(segment));
    }

    /// Append a percentage bar. Values above 100 fill completely.
    pub fn add_percentage_bar(&mut self, percentage: u8) {
        self.segments.push(Segment::PercentageBar(percentage));
    }

    /// Append a blank spacer band.
    pub fn add_blank(&mut self) {
        self.segments.push(Segment::Blank);
    }

    /// Number of segments stacked so far.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Spacing and band height for `count` bands in a `height`-pixel
    /// rectangle. Spacing scales with the rectangle but never drops below
    /// [`MIN_SPACING`].
    pub(crate) fn band_geometry(height: u32, count: u32) -> (u32, u32) {
        debug_assert!(count > 0);
        let spacing = (height / (3 * count)).max(MIN_SPACING);
        let band_height = height.saturating_sub(spacing * (count - 1)) / count;
        (spacing, band_height)
    }

    /// Compose all segments into a `width` x `height` rectangle of
    /// `target` anchored at `(x, y)`.
    ///
    /// A segment that fails to draw is logged and skipped; the remaining
    /// segments keep their positions. Panics if the element is empty,
    /// which is a construction bug in the caller.
    pub fn draw(&self, target: &mut Canvas, x: u32, y: u32, width: u32, height: u32) {
        assert!(
            !self.segments.is_empty(),
            "cannot draw an element with no segments"
        );

        let count = self.segments.len() as u32;
        let (spacing, band_height) = Self::band_geometry(height, count);

        let mut scratch = Canvas::new_transparent(width, height);
        let mut cursor = 0u32;
        for segment in &self.segments {
            let band = Band {
                y: cursor,
                width,
                height: band_height,
            };
            if let Err(err) = segment.draw(&mut scratch, band, self.dpi) {
                warn!("skipping segment: {err}");
            }
            cursor += band_height + spacing;
        }

        target.blit(&scratch, x as i64, y as i64);
    }
}
