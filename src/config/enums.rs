//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How text is painted onto the preview surface.
///
/// Tools that draw shapes share this setting with the text tool; the text tool
/// only distinguishes "fill only", "stroke only" and everything else.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeType {
    /// Fill the glyphs, no outline
    Fill,
    /// Outline the glyphs, no fill
    Stroke,
    /// Fill first, then outline on top
    Both,
}

impl ShapeType {
    /// Whether glyphs get a fill pass.
    pub fn fills(self) -> bool {
        self != ShapeType::Stroke
    }

    /// Whether glyphs get an outline pass.
    pub fn strokes(self) -> bool {
        self != ShapeType::Fill
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// fill_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}
