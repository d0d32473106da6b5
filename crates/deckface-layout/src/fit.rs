//! Two-axis constrained font-size search.
//!
//! Finds the largest point size whose rendered ink box fits a bounding
//! box, by monotonic linear decrement rather than binary search: sizes
//! are small fractions and the two constraints are only weakly
//! correlated, so the height phase runs to completion before the width
//! phase as the designed tie-break.

use crate::font::{string_height, string_width, FontFace};

/// Decrement applied per iteration, and the floor below which the search
/// stops. One constant for both phases.
pub const SIZE_STEP: f32 = 0.25;

/// Overshoot applied to the height-derived seed so the descent phase
/// starts above the answer.
const SEED_OVERSHOOT: f32 = 1.4;

/// Result of a fit search: the chosen size plus the measurements taken
/// at that size, so callers can center without re-measuring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedText {
    pub point_size: f32,
    pub width: u32,
    pub ascent: u32,
    pub descent: u32,
}

/// Find the largest point size at which `text` fits within
/// `max_width` x `max_height` pixels at the given DPI.
///
/// Termination is guaranteed: the size strictly decreases each iteration
/// and each phase stops once it reaches [`SIZE_STEP`].
pub fn max_fitting_font_size(
    face: &FontFace,
    dpi: u32,
    max_width: u32,
    max_height: u32,
    text: &str,
) -> FittedText {
    let seed = max_height as f32 / (dpi as f32 / 72.0) * SEED_OVERSHOOT;

    let size = height_fitting_size(face, dpi, seed, max_height, text);
    let (width, size) = width_fitting_size(face, dpi, size, max_width, text);

    let extents = string_height(face, dpi, size, text);
    FittedText {
        point_size: size,
        width,
        ascent: extents.ascent,
        descent: extents.descent,
    }
}

fn height_fitting_size(
    face: &FontFace,
    dpi: u32,
    starting_size: f32,
    max_height: u32,
    text: &str,
) -> f32 {
    let mut size = starting_size;
    loop {
        let extents = string_height(face, dpi, size, text);
        if extents.height > max_height && size > SIZE_STEP {
            size -= SIZE_STEP;
        } else {
            return size;
        }
    }
}

fn width_fitting_size(
    face: &FontFace,
    dpi: u32,
    starting_size: f32,
    max_width: u32,
    text: &str,
) -> (u32, f32) {
    let mut size = starting_size;
    loop {
        let width = string_width(face, dpi, size, text);
        if width > max_width && size > SIZE_STEP {
            size -= SIZE_STEP;
        } else {
            return (width, size);
        }
    }
}
