//! Rendering support: geometry, paint primitives, and text

pub mod bitmap_font;
pub mod layout;
pub mod paint;
pub mod text;

use tiny_skia::Pixmap;

use crate::error::{Error, Result};

/// Allocate the banner's pixel surface
pub fn new_canvas(width: u32, height: u32) -> Result<Pixmap> {
    Pixmap::new(width, height).ok_or(Error::Canvas { width, height })
}
