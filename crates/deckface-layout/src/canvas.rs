//! Mutable RGBA pixel buffer with top-left origin.
//!
//! A `Canvas` is owned exclusively by whichever component currently
//! composes into it. Finished sub-canvases are pasted into their parent
//! with [`Canvas::blit`] (copy-on-paste), never shared.

use crate::color::Color;

/// A 2D RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new fully transparent canvas.
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::transparent())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = color;
    }

    /// Source-over blend a pixel onto the existing value, clipping
    /// coordinates that fall outside the canvas.
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let dst = self.get(x, y);
        self.set(x, y, color.over(dst));
    }

    /// Paste `src` onto this canvas at `(x, y)` with source-over
    /// compositing. Source pixels falling outside the target are clipped.
    pub fn blit(&mut self, src: &Canvas, x: i64, y: i64) {
        for sy in 0..src.height {
            let ty = y + sy as i64;
            if ty < 0 || ty >= self.height as i64 {
                continue;
            }
            for sx in 0..src.width {
                let tx = x + sx as i64;
                if tx < 0 || tx >= self.width as i64 {
                    continue;
                }
                let over = src.get(sx, sy);
                if over.a <= 0.0 {
                    continue;
                }
                let under = self.get(tx as u32, ty as u32);
                self.set(tx as u32, ty as u32, over.over(under));
            }
        }
    }

    /// Sample with bilinear interpolation using normalized [0, 1]
    /// coordinates.
    pub fn sample_bilinear(&self, u: f64, v: f64) -> Color {
        let x = u * (self.width - 1) as f64;
        let y = v * (self.height - 1) as f64;

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x - x.floor();
        let fy = y - y.floor();

        let c00 = self.get(x0, y0);
        let c10 = self.get(x1, y0);
        let c01 = self.get(x0, y1);
        let c11 = self.get(x1, y1);

        let c0 = c00.lerp(&c10, fx);
        let c1 = c01.lerp(&c11, fx);
        c0.lerp(&c1, fy)
    }

    /// Scale this canvas so its longer dimension equals `size`,
    /// preserving aspect ratio, using bilinear sampling. The shorter
    /// dimension never collapses below one pixel.
    pub fn resize_to_fit(&self, size: u32) -> Canvas {
        let (out_w, out_h) = if self.width >= self.height {
            let h = (size as f64 * self.height as f64 / self.width as f64).round() as u32;
            (size, h.max(1))
        } else {
            let w = (size as f64 * self.width as f64 / self.height as f64).round() as u32;
            (w.max(1), size)
        };

        let mut out = Canvas::new_transparent(out_w, out_h);
        for y in 0..out_h {
            for x in 0..out_w {
                let u = if out_w > 1 {
                    x as f64 / (out_w - 1) as f64
                } else {
                    0.0
                };
                let v = if out_h > 1 {
                    y as f64 / (out_h - 1) as f64
                } else {
                    0.0
                };
                out.set(x, y, self.sample_bilinear(u, v));
            }
        }
        out
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }

    /// Create from 8-bit RGBA bytes (row-major). Panics if `bytes` does
    /// not hold exactly `width * height` pixels.
    pub fn from_rgba8(bytes: &[u8], width: u32, height: u32) -> Self {
        let expected = (width as usize) * (height as usize) * 4;
        assert_eq!(
            bytes.len(),
            expected,
            "expected {} bytes for {}x{} RGBA",
            expected,
            width,
            height
        );
        let data = bytes
            .chunks_exact(4)
            .map(|px| Color::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();
        Self {
            width,
            height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_filled() {
        let c = Canvas::new(4, 3, Color::white());
        assert_eq!(c.data.len(), 12);
        assert_eq!(c.get(3, 2), Color::white());
    }

    #[test]
    fn test_blit_opaque_overwrites() {
        let mut base = Canvas::new(4, 4, Color::black());
        let patch = Canvas::new(2, 2, Color::white());
        base.blit(&patch, 1, 1);

        assert_eq!(base.get(0, 0), Color::black());
        assert_eq!(base.get(1, 1), Color::white());
        assert_eq!(base.get(2, 2), Color::white());
        assert_eq!(base.get(3, 3), Color::black());
    }

    #[test]
    fn test_blit_clips_out_of_bounds() {
        let mut base = Canvas::new(2, 2, Color::black());
        let patch = Canvas::new(4, 4, Color::white());
        base.blit(&patch, -2, -2);

        // Only the overlapping quadrant lands.
        assert_eq!(base.get(0, 0), Color::white());
        assert_eq!(base.get(1, 1), Color::white());
    }

    #[test]
    fn test_blit_transparent_keeps_base() {
        let mut base = Canvas::new(2, 2, Color::rgb(0.2, 0.4, 0.6));
        let patch = Canvas::new_transparent(2, 2);
        base.blit(&patch, 0, 0);
        assert_eq!(base.get(1, 1), Color::rgb(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_resize_to_fit_wide_source() {
        let src = Canvas::new(100, 50, Color::white());
        let out = src.resize_to_fit(40);
        assert_eq!(out.width, 40);
        assert_eq!(out.height, 20);
    }

    #[test]
    fn test_resize_to_fit_tall_source() {
        let src = Canvas::new(30, 90, Color::white());
        let out = src.resize_to_fit(30);
        assert_eq!(out.width, 10);
        assert_eq!(out.height, 30);
    }

    #[test]
    fn test_resize_preserves_solid_fill() {
        let src = Canvas::new(64, 64, Color::rgb(0.5, 0.25, 0.75));
        let out = src.resize_to_fit(16);
        assert_eq!(out.get(8, 8), Color::rgb(0.5, 0.25, 0.75));
    }

    #[test]
    fn test_rgba8_round_trip() {
        let mut src = Canvas::new(2, 2, Color::black());
        src.set(0, 0, Color::white());
        src.set(1, 1, Color::rgba(1.0, 0.0, 0.0, 0.5));

        let bytes = src.to_rgba8();
        let back = Canvas::from_rgba8(&bytes, 2, 2);
        assert_eq!(back.get(0, 0).to_rgba8(), src.get(0, 0).to_rgba8());
        assert_eq!(back.get(1, 1).to_rgba8(), src.get(1, 1).to_rgba8());
    }
}
