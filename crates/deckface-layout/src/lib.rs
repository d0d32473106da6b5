//! Layout and font-fitting engine for control-surface button bitmaps.
//!
//! Renders RGBA images for the buttons and touch segments of multi-button
//! hardware control surfaces. Callers describe a button as stacked
//! segments (icons, text runs, percentage bars, blanks) grouped into
//! layout regions; the engine sizes text with an iterative two-axis font
//! fit, composes each region onto a canvas, and hands back the finished
//! bitmap ready for PNG encoding or device upload.
//!
//! The crate performs no I/O of its own apart from the optional PNG
//! writer: icon decoding, device transport and configuration all live
//! with the caller.

pub mod canvas;
pub mod color;
pub mod element;
pub mod fit;
pub mod font;
pub mod layout;
pub mod png;
pub mod segment;

pub use canvas::Canvas;
pub use color::Color;
pub use element::Element;
pub use fit::{max_fitting_font_size, FittedText};
pub use font::{string_height, string_width, FontError, FontFace, TextExtents};
pub use layout::{ButtonLayout, RenderError, TouchSegmentLayout};
pub use png::{hash_png, write_rgba, write_rgba_to_vec_with_hash, PngConfig, PngError};
pub use segment::{HorizontalAlign, Segment, SegmentError, TextSegment};
