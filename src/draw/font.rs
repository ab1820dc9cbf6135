//! Font descriptor for text rendering.

/// Font configuration for text rendering.
///
/// The family comes from the text font input and may be a CSS-style generic
/// family; weight and style come from config.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "DejaVu Serif") or generic family ("sans-serif")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl FontDescriptor {
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Pango family name for this descriptor.
    ///
    /// Generic CSS families map onto the fontconfig aliases Pango understands.
    pub fn pango_family(&self) -> &str {
        match self.family.trim().to_lowercase().as_str() {
            "sans-serif" | "sans" => "Sans",
            "serif" => "Serif",
            "monospace" => "Monospace",
            "cursive" => "Cursive",
            "fantasy" => "Fantasy",
            _ => self.family.trim(),
        }
    }

    /// Converts this descriptor to a Pango font description string with an
    /// absolute pixel size.
    ///
    /// Format: "Family Style Weight Sizepx"
    /// Example: "Sans Bold 32px" or "Monospace Italic 24px"
    pub fn to_pango_string(&self, size_px: f64) -> String {
        let mut parts = vec![self.pango_family().to_string()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}px", size_px.round().max(1.0) as i32));

        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
