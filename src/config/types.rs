//! Configuration type definitions.

use super::enums::{ColorSpec, ShapeType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings shared by every drawing tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolConfig {
    /// Interval between live-preview redraws in milliseconds (valid range: 10 - 1000)
    /// Lower values feel snappier, higher values redraw less often while typing
    #[serde(default = "default_draw_delay_ms")]
    pub draw_delay_ms: u64,

    /// How text is painted: "fill", "stroke" or "both"
    #[serde(default = "default_shape_type")]
    pub shape_type: ShapeType,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            draw_delay_ms: default_draw_delay_ms(),
            shape_type: default_shape_type(),
        }
    }
}

/// Initial values of the text inputs and the text paint style.
///
/// The string, font and size are only starting values; the user edits them
/// while the text tool is active.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Text shown when the tool is first activated
    #[serde(default = "default_string")]
    pub default_string: String,

    /// Font family name or CSS generic family ("sans-serif", "serif", "monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light")
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in pixels (valid range: 6.0 - 400.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Outline width in pixels for the stroke pass (valid range: 0.5 - 50.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Glyph fill color
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Glyph outline color
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            default_string: default_string(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
            line_width: default_line_width(),
            fill_color: default_fill_color(),
            stroke_color: default_stroke_color(),
        }
    }
}

/// User-facing status and error strings.
///
/// Override these to localize the tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Messages {
    /// Shown when the drawing surface cannot render text
    #[serde(default = "default_error_text_unsupported")]
    pub error_text_unsupported: String,

    /// Shown after text has been committed into the image
    #[serde(default = "default_status_text_committed")]
    pub status_text_committed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            error_text_unsupported: default_error_text_unsupported(),
            status_text_committed: default_status_text_committed(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_draw_delay_ms() -> u64 {
    100
}

fn default_shape_type() -> ShapeType {
    ShapeType::Both
}

fn default_string() -> String {
    "Hello".to_string()
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    32.0
}

fn default_line_width() -> f64 {
    1.0
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_error_text_unsupported() -> String {
    "Text drawing is not supported by this drawing surface.".to_string()
}

fn default_status_text_committed() -> String {
    "Text added to the image.".to_string()
}
