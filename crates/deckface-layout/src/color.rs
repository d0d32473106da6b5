//! Color utilities for button compositing.

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Create fully transparent black.
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Linearly interpolate between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Return this color with its alpha scaled by `factor`.
    pub fn with_alpha_scaled(&self, factor: f64) -> Color {
        Color {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Source-over composite of `self` on top of `dst`.
    pub fn over(&self, dst: Color) -> Color {
        let src_a = self.a;
        let dst_a = dst.a;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a < 1e-4 {
            return Color::transparent();
        }

        Color::rgba(
            (self.r * src_a + dst.r * dst_a * (1.0 - src_a)) / out_a,
            (self.g * src_a + dst.g * dst_a * (1.0 - src_a)) / out_a,
            (self.b * src_a + dst.b * dst_a * (1.0 - src_a)) / out_a,
            out_a,
        )
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Create from 8-bit RGBA (e.g. pixels of a decoded icon).
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::rgba(
            rgba[0] as f64 / 255.0,
            rgba[1] as f64 / 255.0,
            rgba[2] as f64 / 255.0,
            rgba[3] as f64 / 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_round_trip() {
        let c = Color::rgba(0.25, 0.5, 0.75, 1.0);
        let bytes = c.to_rgba8();
        let back = Color::from_rgba8(bytes);
        assert!((back.r - c.r).abs() < 0.01);
        assert!((back.g - c.g).abs() < 0.01);
        assert!((back.b - c.b).abs() < 0.01);
        assert_eq!(back.a, 1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::black();
        let b = Color::white();
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Color::gray(0.5));
    }

    #[test]
    fn test_over_opaque_src_wins() {
        let src = Color::rgb(1.0, 0.0, 0.0);
        let dst = Color::rgb(0.0, 1.0, 0.0);
        assert_eq!(src.over(dst), src);
    }

    #[test]
    fn test_over_transparent_src_keeps_dst() {
        let src = Color::transparent();
        let dst = Color::rgb(0.0, 1.0, 0.0);
        assert_eq!(src.over(dst), dst);
    }

    #[test]
    fn test_clamp_out_of_range() {
        let c = Color::rgba(1.5, -0.5, 0.5, 2.0).clamp();
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.5, 1.0));
    }
}
