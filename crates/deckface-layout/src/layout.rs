//! Button and touch-segment layouts.
//!
//! A layout owns up to a handful of element slots (icon, info, label),
//! populated lazily through setters, and places them on a fresh canvas
//! when rendered. Rendering borrows the layout immutably and allocates
//! everything per call, so the same built layout renders byte-identical
//! bitmaps every time.

use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::element::Element;
use crate::font::FontFace;
use crate::segment::TextSegment;

/// Errors from rendering a layout.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested output bitmap has zero area.
    #[error("cannot render into {0}x{1} bounds")]
    InvalidBounds(u32, u32),
}

/// Fraction of the available height the icon region takes, as a function
/// of how many info segments share the remainder.
pub(crate) fn icon_ratio(info_segments: usize) -> f64 {
    match info_segments {
        0 => 1.0,
        1 => 0.66,
        n => (100.0 / n as f64).round() / 100.0,
    }
}

fn check_bounds(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidBounds(width, height));
    }
    Ok(())
}

/// Two-region layout for a push button: icon above an info stack.
#[derive(Debug, Clone)]
pub struct ButtonLayout {
    icon: Option<Element>,
    info: Option<Element>,
    dpi: u32,
}

impl ButtonLayout {
    pub fn new(dpi: u32) -> Self {
        Self {
            icon: None,
            info: None,
            dpi,
        }
    }

    /// Place an icon in the upper region, replacing any previous one.
    pub fn set_icon(&mut self, icon: Canvas) {
        let mut element = Element::new(self.dpi);
        element.add_icon(icon);
        self.icon = Some(element);
    }

    /// Append an auto-fitted, centered text line to the info stack.
    pub fn add_text(&mut self, text: impl Into<String>, face: FontFace, color: Color) {
        self.info_mut().add_text(text, face, color);
    }

    /// Append a text line with full placement control.
    pub fn add_text_segment(&mut self, segment: TextSegment) {
        self.info_mut().add_text_segment(segment);
    }

    /// Append a percentage bar to the info stack.
    pub fn add_percentage_bar(&mut self, percentage: u8) {
        self.info_mut().add_percentage_bar(percentage);
    }

    /// Append a blank spacer to the info stack.
    pub fn add_blank(&mut self) {
        self.info_mut().add_blank();
    }

    fn info_mut(&mut self) -> &mut Element {
        self.info.get_or_insert_with(|| Element::new(self.dpi))
    }

    /// Render to a fresh canvas of exactly the requested bounds.
    pub fn render(&self, width: u32, height: u32) -> Result<Canvas, RenderError> {
        check_bounds(width, height)?;
        let mut canvas = Canvas::new_transparent(width, height);

        let margin = height / 18;
        let avail_w = width.saturating_sub(2 * margin);
        let avail_h = height.saturating_sub(2 * margin);

        match (&self.icon, &self.info) {
            (Some(icon), info) => {
                let info_count = info.as_ref().map_or(0, Element::segment_count);
                let icon_h =
                    ((avail_h as f64 * icon_ratio(info_count)) as u32).min(avail_w);
                icon.draw(&mut canvas, margin, margin, avail_w, icon_h);

                if let Some(info) = info {
                    let info_y = margin + icon_h + margin;
                    let info_h = avail_h.saturating_sub(icon_h + margin);
                    if info_h > 0 {
                        info.draw(&mut canvas, margin, info_y, avail_w, info_h);
                    }
                }
            }
            (None, Some(info)) => {
                info.draw(&mut canvas, margin, margin, avail_w, avail_h);
            }
            (None, None) => {}
        }

        Ok(canvas)
    }
}

/// Three-region layout for a touch segment: a label strip across the top,
/// then an icon | info row below it.
#[derive(Debug, Clone)]
pub struct TouchSegmentLayout {
    label: Option<Element>,
    icon: Option<Element>,
    info: Option<Element>,
    dpi: u32,
}

impl TouchSegmentLayout {
    pub fn new(dpi: u32) -> Self {
        Self {
            label: None,
            icon: None,
            info: None,
            dpi,
        }
    }

    /// Set the label strip text, replacing any previous label.
    pub fn set_label(&mut self, text: impl Into<String>, face: FontFace, color: Color) {
        let mut element = Element::new(self.dpi);
        element.add_text(text, face, color);
        self.label = Some(element);
    }

    /// Place an icon on the left of the row, replacing any previous one.
    pub fn set_icon(&mut self, icon: Canvas) {
        let mut element = Element::new(self.dpi);
        element.add_icon(icon);
        self.icon = Some(element);
    }

    /// Append an auto-fitted, centered text line to the info stack.
    pub fn add_text(&mut self, text: impl Into<String>, face: FontFace, color: Color) {
        self.info_mut().add_text(text, face, color);
    }

    /// Append a text line with full placement control.
    pub fn add_text_segment(&mut self, segment: TextSegment) {
        self.info_mut().add_text_segment(segment);
    }

    /// Append a percentage bar to the info stack.
    pub fn add_percentage_bar(&mut self, percentage: u8) {
        self.info_mut().add_percentage_bar(percentage);
    }

    /// Append a blank spacer to the info stack.
    pub fn add_blank(&mut self) {
        self.info_mut().add_blank();
    }

    fn info_mut(&mut self) -> &mut Element {
        self.info.get_or_insert_with(|| Element::new(self.dpi))
    }

    /// Render to a fresh canvas of exactly the requested bounds.
    /// Draw order: label, icon, info.
    pub fn render(&self, width: u32, height: u32) -> Result<Canvas, RenderError> {
        check_bounds(width, height)?;
        let mut canvas = Canvas::new_transparent(width, height);

        let margin = height / 18;
        let avail_w = width.saturating_sub(2 * margin);
        let avail_h = height.saturating_sub(2 * margin);

        let mut row_y = margin;
        let mut row_h = avail_h;

        if let Some(label) = &self.label {
            let label_h =
                ((avail_h as f64 / 4.5).round() as u32).saturating_sub(margin / 2);
            label.draw(&mut canvas, margin, margin, avail_w, label_h);
            row_y = margin + label_h + margin;
            row_h = avail_h.saturating_sub(label_h + margin);
        }

        match (&self.icon, &self.info) {
            (Some(icon), Some(info)) => {
                let icon_w = ((avail_w as f64 / 3.0) as u32).saturating_sub(margin / 2);
                icon.draw(&mut canvas, margin, row_y, icon_w, row_h);

                let info_x = margin + icon_w + margin;
                let info_w = avail_w.saturating_sub(icon_w + margin / 2);
                info.draw(&mut canvas, info_x, row_y, info_w, row_h);
            }
            (Some(icon), None) => {
                icon.draw(&mut canvas, margin, row_y, avail_w, row_h);
            }
            (None, Some(info)) => {
                info.draw(&mut canvas, margin, row_y, avail_w, row_h);
            }
            (None, None) => {}
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_support::test_face;

    fn painted_rows(canvas: &Canvas) -> Vec<u32> {
        (0..canvas.height)
            .filter(|&y| (0..canvas.width).any(|x| canvas.get(x, y).a > 0.0))
            .collect()
    }

    #[test]
    fn test_icon_ratio_table() {
        assert_eq!(icon_ratio(0), 1.0);
        assert_eq!(icon_ratio(1), 0.66);
        assert_eq!(icon_ratio(2), 0.5);
        assert_eq!(icon_ratio(3), 0.33);
        assert_eq!(icon_ratio(4), 0.25);
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let layout = ButtonLayout::new(72);
        assert!(matches!(
            layout.render(0, 72),
            Err(RenderError::InvalidBounds(0, 72))
        ));
        let layout = TouchSegmentLayout::new(72);
        assert!(layout.render(72, 0).is_err());
    }

    #[test]
    fn test_empty_layouts_render_blank() {
        let canvas = ButtonLayout::new(72).render(72, 72).unwrap();
        assert_eq!(canvas.width, 72);
        assert_eq!(canvas.height, 72);
        assert!(canvas.data.iter().all(|c| c.a == 0.0));

        let canvas = TouchSegmentLayout::new(72).render(200, 100).unwrap();
        assert!(canvas.data.iter().all(|c| c.a == 0.0));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut layout = ButtonLayout::new(72);
        layout.set_icon(Canvas::new(32, 32, Color::rgb(0.8, 0.2, 0.2)));
        layout.add_text("Mute", test_face(), Color::white());
        layout.add_percentage_bar(40);

        let first = layout.render(96, 96).unwrap();
        let second = layout.render(96, 96).unwrap();
        assert_eq!(first.to_rgba8(), second.to_rgba8());
    }

    #[test]
    fn test_button_icon_and_text_scenario() {
        // Icon plus one text line: icon gets 66% of the available height,
        // text sits below it.
        let mut layout = ButtonLayout::new(72);
        layout.set_icon(Canvas::new(48, 48, Color::white()));
        layout.add_text("Mic", test_face(), Color::white());

        let canvas = layout.render(144, 144).unwrap();
        let rows = painted_rows(&canvas);
        assert!(!rows.is_empty());

        let margin = 144 / 18;
        let avail_h = 144 - 2 * margin;
        let icon_h = (avail_h as f64 * 0.66) as u32;
        // Something painted inside the icon region and inside the info
        // region below it.
        assert!(rows.iter().any(|&y| y >= margin && y < margin + icon_h));
        assert!(rows.iter().any(|&y| y >= margin + icon_h + margin));
        // Nothing above the top margin.
        assert!(rows.iter().all(|&y| y >= margin));
    }

    #[test]
    fn test_button_text_only_uses_full_height() {
        // A single narrow glyph with no icon: height is the binding
        // constraint, so the fitted ink fills most of the available
        // region instead of the sliver it would get below an icon.
        let mut tall = ButtonLayout::new(72);
        tall.add_text("9", test_face(), Color::white());
        let canvas = tall.render(144, 144).unwrap();

        let rows = painted_rows(&canvas);
        let span = rows.last().unwrap() - rows.first().unwrap();
        assert!(span > 144 / 2, "text ink span {span} too small");
    }

    #[test]
    fn test_touch_segment_full_scenario() {
        // Label on top, icon on the left of the row, bar on the right.
        let mut layout = TouchSegmentLayout::new(72);
        layout.set_label("Volume", test_face(), Color::white());
        layout.set_icon(Canvas::new(40, 40, Color::rgb(0.2, 0.6, 0.9)));
        layout.add_percentage_bar(50);

        let canvas = layout.render(400, 108).unwrap();

        let margin = 108 / 18;
        let avail_w = 400 - 2 * margin;
        let avail_h = 108 - 2 * margin;
        let label_h = ((avail_h as f64 / 4.5).round() as u32) - margin / 2;
        let row_y = margin + label_h + margin;
        let icon_w = ((avail_w as f64 / 3.0) as u32) - margin / 2;

        // Label ink in the label strip.
        let label_ink = (0..400u32)
            .any(|x| (margin..margin + label_h).any(|y| canvas.get(x, y).a > 0.0));
        assert!(label_ink, "label strip empty");

        // Icon ink left of the divide, bar ink right of it.
        let icon_ink = (margin..margin + icon_w)
            .any(|x| (row_y..108 - margin).any(|y| canvas.get(x, y).a > 0.0));
        assert!(icon_ink, "icon column empty");
        let info_x = margin + icon_w + margin;
        let bar_ink = (info_x..400 - margin)
            .any(|x| (row_y..108 - margin).any(|y| canvas.get(x, y).a > 0.0));
        assert!(bar_ink, "info column empty");
    }

    #[test]
    fn test_touch_segment_info_only_spans_row() {
        let mut layout = TouchSegmentLayout::new(72);
        layout.add_percentage_bar(100);

        let canvas = layout.render(300, 90).unwrap();
        let margin = 90 / 18;
        // Full-width bar reaches both ends of the available width.
        let ys = painted_rows(&canvas);
        let y = ys[0];
        assert!(canvas.get(margin, y).a > 0.0);
        assert!(canvas.get(300 - margin - 1, y).a > 0.0);
    }

    #[test]
    fn test_icon_height_capped_by_width() {
        // Tall narrow button: the icon region may not exceed the
        // available width.
        let mut layout = ButtonLayout::new(72);
        layout.set_icon(Canvas::new(64, 64, Color::white()));

        let canvas = layout.render(72, 288).unwrap();
        let margin = 288 / 18;
        let avail_w = 72 - 2 * margin;
        let rows = painted_rows(&canvas);
        // All icon ink falls within a square of side avail_w at the top.
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|&y| y < margin + avail_w));
    }
}
