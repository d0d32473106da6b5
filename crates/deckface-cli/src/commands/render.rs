//! Render command implementation
//!
//! Reads a JSON surface spec, builds the matching layout, renders it and
//! writes a deterministic PNG.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use deckface_layout::{
    ButtonLayout, Canvas, Color, FontFace, HorizontalAlign, PngConfig, TextSegment,
    TouchSegmentLayout,
};

use crate::spec::{AlignSpec, SurfaceKind, SurfaceSpec, TextSpec};

static BUNDLED_FONT: &[u8] = include_bytes!("../../../../resources/fonts/DejaVuSans.ttf");

/// Run the render command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `output` - Output PNG path
/// * `print_hash` - Print the BLAKE3 hash of the encoded PNG
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(spec_path: &str, output: &str, print_hash: bool) -> Result<ExitCode> {
    println!("{} {}", "Rendering:".cyan().bold(), spec_path);

    let spec_content = fs::read_to_string(spec_path)
        .with_context(|| format!("Failed to read spec file: {}", spec_path))?;
    let spec: SurfaceSpec = serde_json::from_str(&spec_content)
        .with_context(|| format!("Failed to parse spec: {}", spec_path))?;
    spec.validate()?;

    let face = load_font(spec.font.as_deref(), spec_path)?;
    let canvas = render_spec(&spec, &face, spec_path)?;

    let (data, hash) = deckface_layout::write_rgba_to_vec_with_hash(&canvas, &PngConfig::default())
        .context("Failed to encode PNG")?;
    fs::write(output, &data).with_context(|| format!("Failed to write: {}", output))?;

    println!(
        "{} {} ({}x{})",
        "SUCCESS".green().bold(),
        output,
        canvas.width,
        canvas.height
    );
    if print_hash {
        println!("{} {}", "blake3:".cyan(), hash);
    }

    Ok(ExitCode::SUCCESS)
}

/// Build and render the layout a spec describes.
pub fn render_spec(spec: &SurfaceSpec, face: &FontFace, spec_path: &str) -> Result<Canvas> {
    let color = Color::rgb(spec.color[0], spec.color[1], spec.color[2]);
    let icon = spec
        .icon
        .as_deref()
        .map(|path| load_icon(path, spec_path))
        .transpose()?;

    let canvas = match spec.kind {
        SurfaceKind::Button => {
            let mut layout = ButtonLayout::new(spec.dpi);
            if let Some(icon) = icon {
                layout.set_icon(icon);
            }
            for text in &spec.texts {
                layout.add_text_segment(text_segment(text, face, color));
            }
            if let Some(pct) = spec.percentage {
                layout.add_percentage_bar(pct);
            }
            for _ in 0..spec.blanks {
                layout.add_blank();
            }
            layout.render(spec.width, spec.height)?
        }
        SurfaceKind::TouchSegment => {
            let mut layout = TouchSegmentLayout::new(spec.dpi);
            if let Some(label) = &spec.label {
                layout.set_label(label.clone(), face.clone(), color);
            }
            if let Some(icon) = icon {
                layout.set_icon(icon);
            }
            for text in &spec.texts {
                layout.add_text_segment(text_segment(text, face, color));
            }
            if let Some(pct) = spec.percentage {
                layout.add_percentage_bar(pct);
            }
            for _ in 0..spec.blanks {
                layout.add_blank();
            }
            layout.render(spec.width, spec.height)?
        }
    };
    Ok(canvas)
}

fn text_segment(text: &TextSpec, face: &FontFace, color: Color) -> TextSegment {
    TextSegment {
        text: text.text.clone(),
        face: face.clone(),
        point_size: text.point_size,
        color,
        align: match text.align {
            AlignSpec::Start => HorizontalAlign::Start,
            AlignSpec::Center => HorizontalAlign::Center,
            AlignSpec::End => HorizontalAlign::End,
        },
        center_vertically: text.center_vertically,
    }
}

/// Load the face named in the spec, or the bundled default. Relative
/// paths resolve against the spec file's directory.
fn load_font(path: Option<&str>, spec_path: &str) -> Result<FontFace> {
    match path {
        Some(path) => {
            let resolved = resolve(path, spec_path);
            let bytes = fs::read(&resolved)
                .with_context(|| format!("Failed to read font: {}", resolved.display()))?;
            FontFace::from_bytes(&bytes)
                .with_context(|| format!("Failed to parse font: {}", resolved.display()))
        }
        None => FontFace::from_bytes(BUNDLED_FONT).context("Bundled font failed to parse"),
    }
}

fn load_icon(path: &str, spec_path: &str) -> Result<Canvas> {
    let resolved = resolve(path, spec_path);
    let image = image::open(&resolved)
        .with_context(|| format!("Failed to decode icon: {}", resolved.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(Canvas::from_rgba8(image.as_raw(), width, height))
}

fn resolve(path: &str, spec_path: &str) -> std::path::PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match Path::new(spec_path).parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}
