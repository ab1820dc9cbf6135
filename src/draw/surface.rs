//! Cairo-backed preview surface with Pango text rendering.

use super::{Color, DrawError, FontDescriptor, painted_bounds};
use crate::config::TextConfig;
use crate::host::TextSurface;
use cairo::{Context, Format, ImageSurface};
use log::warn;

/// Paint state applied to every text operation, like a canvas context's
/// font/lineWidth/fillStyle/strokeStyle.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontDescriptor,
    /// Font size in pixels
    pub size: f64,
    /// Outline width in pixels
    pub line_width: f64,
    pub fill: Color,
    pub stroke: Color,
}

impl TextStyle {
    pub fn from_config(text: &TextConfig) -> Self {
        Self {
            font: FontDescriptor::new(
                text.font_family.clone(),
                text.font_weight.clone(),
                text.font_style.clone(),
            ),
            size: text.font_size,
            line_width: text.line_width,
            fill: text.fill_color.to_color(),
            stroke: text.stroke_color.to_color(),
        }
    }
}

/// ARGB image surface that tools draw their preview on.
pub struct CairoSurface {
    surface: ImageSurface,
    style: TextStyle,
    text_enabled: bool,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32, style: TextStyle) -> Result<Self, DrawError> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            style,
            text_enabled: true,
        })
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut TextStyle {
        &mut self.style
    }

    /// Turns off text rendering, e.g. for hosts running without a font backend.
    pub fn disable_text(&mut self) {
        self.text_enabled = false;
    }

    pub fn image(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Clears the whole surface.
    pub fn clear(&mut self) {
        let (width, height) = (self.width() as f64, self.height() as f64);
        self.clear_region(0.0, 0.0, width, height);
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of all non-transparent pixels.
    pub fn painted_bounds(&mut self) -> Option<(i32, i32, i32, i32)> {
        painted_bounds(&mut self.surface)
    }

    fn context(&self) -> Option<Context> {
        match Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                warn!("Failed to create drawing context: {err}");
                None
            }
        }
    }

    /// Lays out `text` and moves to the origin that puts its baseline at `y`.
    fn layout_at(&self, ctx: &Context, text: &str, x: f64, y: f64) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(ctx);
        let font_desc =
            pango::FontDescription::from_string(&self.style.font.to_pango_string(self.style.size));
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions from the top-left, callers give the baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        ctx.move_to(x, y - baseline);
        layout
    }
}

impl TextSurface for CairoSurface {
    fn supports_text(&self) -> bool {
        self.text_enabled
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some(ctx) = self.context() else {
            return;
        };
        ctx.set_operator(cairo::Operator::Clear);
        ctx.rectangle(x, y, width, height);
        if let Err(err) = ctx.fill() {
            warn!("Failed to clear preview region: {err}");
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if !self.text_enabled {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };
        ctx.set_antialias(cairo::Antialias::Best);

        let layout = self.layout_at(&ctx, text, x, y);
        self.style.fill.apply(&ctx);
        pangocairo::functions::show_layout(&ctx, &layout);
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        if !self.text_enabled {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };
        ctx.set_antialias(cairo::Antialias::Best);

        let layout = self.layout_at(&ctx, text, x, y);
        pangocairo::functions::layout_path(&ctx, &layout);

        self.style.stroke.apply(&ctx);
        ctx.set_line_width(self.style.line_width);
        ctx.set_line_join(cairo::LineJoin::Round);
        if let Err(err) = ctx.stroke() {
            warn!("Failed to stroke text: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> CairoSurface {
        CairoSurface::new(120, 60, TextStyle::from_config(&TextConfig::default())).unwrap()
    }

    #[test]
    fn new_surface_is_blank() {
        let mut surface = surface();
        assert_eq!(surface.painted_bounds(), None);
        assert_eq!((surface.width(), surface.height()), (120, 60));
    }

    #[test]
    fn fill_text_paints_and_clear_erases() {
        let mut surface = surface();
        surface.fill_text("Hi", 10.0, 40.0);
        let (min_x, _, _, max_y) = surface.painted_bounds().expect("text should paint pixels");
        assert!(min_x >= 8, "glyphs start near the origin, got {min_x}");
        assert!(max_y <= 50, "glyphs sit on the baseline, got {max_y}");

        surface.clear();
        assert_eq!(surface.painted_bounds(), None);
    }

    #[test]
    fn stroke_text_paints_outline() {
        let mut surface = surface();
        surface.stroke_text("Hi", 10.0, 40.0);
        assert!(surface.painted_bounds().is_some());
    }

    #[test]
    fn clear_region_only_touches_its_rectangle() {
        let mut surface = surface();
        surface.fill_text("W", 2.0, 40.0);
        surface.fill_text("W", 80.0, 40.0);
        surface.clear_region(0.0, 0.0, 60.0, 60.0);

        let (min_x, ..) = surface.painted_bounds().unwrap();
        assert!(min_x >= 60);
    }

    #[test]
    fn disabled_text_draws_nothing() {
        let mut surface = surface();
        surface.disable_text();
        assert!(!surface.supports_text());
        surface.fill_text("Hi", 10.0, 40.0);
        surface.stroke_text("Hi", 10.0, 40.0);
        assert_eq!(surface.painted_bounds(), None);
    }
}
