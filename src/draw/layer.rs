//! Persistent image layer that committed previews are baked into.

use super::{DrawError, painted_bounds};
use cairo::{Context, Format, ImageSurface};
use std::fs::File;
use std::path::Path;

#[derive(Debug)]
pub struct Layer {
    surface: ImageSurface,
}

impl Layer {
    pub fn new(width: i32, height: i32) -> Result<Self, DrawError> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    /// Paints `source` over the layer at the origin.
    pub fn composite(&mut self, source: &ImageSurface) -> Result<(), DrawError> {
        let ctx = Context::new(&self.surface)?;
        ctx.set_source_surface(source, 0.0, 0.0)?;
        ctx.set_operator(cairo::Operator::Over);
        ctx.paint()?;
        Ok(())
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of all non-transparent pixels.
    pub fn painted_bounds(&mut self) -> Option<(i32, i32, i32, i32)> {
        painted_bounds(&mut self.surface)
    }

    pub fn write_png(&self, path: &Path) -> Result<(), DrawError> {
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        Ok(())
    }
}
