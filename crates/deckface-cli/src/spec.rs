//! JSON button spec types.
//!
//! One spec file describes one rendered image: the surface kind, output
//! geometry, and the content slots (icon, label, texts, bar, blanks).

use anyhow::bail;
use serde::Deserialize;

fn default_dpi() -> u32 {
    72
}

fn default_color() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

/// Which layout renders this spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Button,
    TouchSegment,
}

/// Horizontal text alignment as spelled in spec files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignSpec {
    Start,
    #[default]
    Center,
    End,
}

/// One text line of the info stack.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextSpec {
    pub text: String,
    #[serde(default)]
    pub align: AlignSpec,
    /// Point size; 0 (the default) means fit to the band.
    #[serde(default)]
    pub point_size: f32,
    #[serde(default)]
    pub center_vertically: bool,
}

/// A complete button or touch-segment description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceSpec {
    pub kind: SurfaceKind,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    /// Path to a TTF/OTF file; the bundled face is used when absent.
    #[serde(default)]
    pub font: Option<String>,
    /// Path to an icon image, decoded with the `image` crate.
    #[serde(default)]
    pub icon: Option<String>,
    /// Label strip text (touch segments only).
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub texts: Vec<TextSpec>,
    /// Percentage bar fill, 0-100.
    #[serde(default)]
    pub percentage: Option<u8>,
    /// Number of blank spacer bands appended after the other segments.
    #[serde(default)]
    pub blanks: u32,
    /// Foreground RGB for text, components in [0, 1].
    #[serde(default = "default_color")]
    pub color: [f64; 3],
}

impl SurfaceSpec {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("width and height must be nonzero (got {}x{})", self.width, self.height);
        }
        if self.dpi == 0 {
            bail!("dpi must be nonzero");
        }
        if let Some(pct) = self.percentage {
            if pct > 100 {
                bail!("percentage must be 0-100 (got {pct})");
            }
        }
        if self.label.is_some() && self.kind == SurfaceKind::Button {
            bail!("labels are only supported on touch_segment surfaces");
        }
        for component in self.color {
            if !(0.0..=1.0).contains(&component) {
                bail!("color components must be in [0, 1] (got {component})");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal(kind: &str) -> String {
        format!(r#"{{"kind": "{kind}", "width": 96, "height": 96}}"#)
    }

    #[test]
    fn test_minimal_spec_parses_with_defaults() {
        let spec: SurfaceSpec = serde_json::from_str(&minimal("button")).unwrap();
        assert_eq!(spec.kind, SurfaceKind::Button);
        assert_eq!(spec.dpi, 72);
        assert!(spec.font.is_none());
        assert!(spec.icon.is_none());
        assert!(spec.texts.is_empty());
        assert_eq!(spec.blanks, 0);
        assert_eq!(spec.color, [1.0, 1.0, 1.0]);
        spec.validate().unwrap();
    }

    #[test]
    fn test_full_spec_parses() {
        let json = r#"{
            "kind": "touch_segment",
            "width": 400,
            "height": 108,
            "dpi": 96,
            "label": "Volume",
            "icon": "icons/vol.png",
            "texts": [
                {"text": "50%", "align": "end", "point_size": 12.5},
                {"text": "Main", "center_vertically": true}
            ],
            "percentage": 50,
            "blanks": 1,
            "color": [0.9, 0.9, 0.2]
        }"#;
        let spec: SurfaceSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.kind, SurfaceKind::TouchSegment);
        assert_eq!(spec.texts.len(), 2);
        assert_eq!(spec.texts[0].align, AlignSpec::End);
        assert_eq!(spec.texts[1].align, AlignSpec::Center);
        assert!(spec.texts[1].center_vertically);
        assert_eq!(spec.percentage, Some(50));
        spec.validate().unwrap();
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{"kind": "button", "width": 96, "height": 96, "wat": 1}"#;
        assert!(serde_json::from_str::<SurfaceSpec>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let json = r#"{"kind": "button", "width": 0, "height": 96}"#;
        let spec: SurfaceSpec = serde_json::from_str(json).unwrap();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_percentage_over_100() {
        let json = r#"{"kind": "button", "width": 96, "height": 96, "percentage": 101}"#;
        let spec: SurfaceSpec = serde_json::from_str(json).unwrap();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_label_on_button() {
        let json = r#"{"kind": "button", "width": 96, "height": 96, "label": "Nope"}"#;
        let spec: SurfaceSpec = serde_json::from_str(json).unwrap();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_color() {
        let json = r#"{"kind": "button", "width": 96, "height": 96, "color": [1.5, 0.0, 0.0]}"#;
        let spec: SurfaceSpec = serde_json::from_str(json).unwrap();
        assert!(spec.validate().is_err());
    }
}
