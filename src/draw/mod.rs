//! Rendering primitives (Cairo/Pango based).
//!
//! - [`Color`]: RGBA color with named palette constants
//! - [`FontDescriptor`]: font family/weight/style to Pango description
//! - [`CairoSurface`]: preview surface implementing text fill/stroke
//! - [`Layer`]: persistent image layer receiving committed previews

pub mod color;
pub mod font;
pub mod layer;
pub mod surface;

pub use color::Color;
pub use font::FontDescriptor;
pub use layer::Layer;
pub use surface::{CairoSurface, TextStyle};

use cairo::ImageSurface;
use thiserror::Error;

/// Errors raised while creating, compositing or exporting surfaces.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Bounding box of the non-transparent pixels of an ARGB32 surface.
///
/// Returns `None` for a fully transparent surface or when the pixel data is
/// not exclusively accessible (a live context still references it).
pub(crate) fn painted_bounds(surface: &mut ImageSurface) -> Option<(i32, i32, i32, i32)> {
    surface.flush();
    let (width, height) = (surface.width(), surface.height());
    let stride = surface.stride() as usize;
    let data = surface.data().ok()?;

    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for y in 0..height {
        let row = &data[y as usize * stride..];
        for x in 0..width {
            // Native-endian ARGB32; a zero word is fully transparent
            let offset = x as usize * 4;
            if row[offset..offset + 4].iter().all(|byte| *byte == 0) {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
            });
        }
    }
    bounds
}
