//! Configuration file support for textplace.
//!
//! Settings are read from `~/.config/textplace/config.toml`. They cover the
//! redraw interval and paint mode shared by drawing tools, the initial values
//! of the text inputs, and the user-facing messages.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::{ColorSpec, ShapeType};
pub use types::{Messages, TextConfig, ToolConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [tool]
/// draw_delay_ms = 100
/// shape_type = "both"
///
/// [text]
/// default_string = "Hello"
/// font_family = "serif"
/// font_size = 48.0
/// line_width = 2.0
/// fill_color = "blue"
/// stroke_color = [255, 255, 255]
///
/// [messages]
/// error_text_unsupported = "Ce canevas ne sait pas dessiner du texte."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Redraw interval and paint mode
    #[serde(default)]
    pub tool: ToolConfig,

    /// Text input defaults and paint style
    #[serde(default)]
    pub text: TextConfig,

    /// Status and error strings
    #[serde(default)]
    pub messages: Messages,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `tool.draw_delay_ms`: 10 - 1000
    /// - `text.font_size`: 6.0 - 400.0
    /// - `text.line_width`: 0.5 - 50.0
    fn validate_and_clamp(&mut self) {
        if !(10..=1000).contains(&self.tool.draw_delay_ms) {
            log::warn!(
                "Invalid draw_delay_ms {}, clamping to 10-1000 range",
                self.tool.draw_delay_ms
            );
            self.tool.draw_delay_ms = self.tool.draw_delay_ms.clamp(10, 1000);
        }

        if !(6.0..=400.0).contains(&self.text.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 6.0-400.0 range",
                self.text.font_size
            );
            self.text.font_size = if self.text.font_size.is_nan() {
                TextConfig::default().font_size
            } else {
                self.text.font_size.clamp(6.0, 400.0)
            };
        }

        if !(0.5..=50.0).contains(&self.text.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.5-50.0 range",
                self.text.line_width
            );
            self.text.line_width = if self.text.line_width.is_nan() {
                TextConfig::default().line_width
            } else {
                self.text.line_width.clamp(0.5, 50.0)
            };
        }

        if self.text.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'sans-serif'");
            self.text.font_family = "sans-serif".to_string();
        }

        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }

        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }
    }

    /// Parses a TOML document and validates it.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source).context("Failed to parse config")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/textplace/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("textplace");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `path`, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
