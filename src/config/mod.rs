//! Configuration file support for paintbox.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintbox/config.toml`. Settings include drawing defaults,
//! frame pacing, UI preferences, and keybindings.
//!
//! If no config file exists, defaults are used automatically. The defaults
//! reproduce the stock behavior: Free mode, black, brush size 5, 60 FPS.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{Action, BindingError, KeyBinding, KeybindingsConfig};
pub use types::{DrawingConfig, PerformanceConfig, UiConfig};

use crate::input::state::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Brush sizes accepted anywhere in the program.
pub const BRUSH_SIZE_RANGE: std::ops::RangeInclusive<f64> = MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_mode = "line"
/// default_color = "red"
/// default_brush_size = 8.0
///
/// [performance]
/// target_fps = 60
///
/// [ui]
/// show_fps = false
///
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial drawing state (mode, color, brush size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Frame pacing and buffering
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1.0 - 50.0 (rounded to a whole number)
    /// - `preview_opacity`: 0.0 - 1.0
    /// - `target_fps`: 1 - 240
    /// - `buffer_count`: 2 - 4
    ///
    /// A keybinding table that fails to build is replaced by the defaults.
    fn validate_and_clamp(&mut self) {
        let size = self.drawing.default_brush_size;
        if !size.is_finite() || !BRUSH_SIZE_RANGE.contains(&size) || size.fract() != 0.0 {
            log::warn!(
                "Invalid default_brush_size {:.1}, clamping to a whole number in 1-50",
                size
            );
            self.drawing.default_brush_size = if size.is_finite() {
                size.round()
                    .clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end())
            } else {
                DrawingConfig::default().default_brush_size
            };
        }

        if !(0.0..=1.0).contains(&self.drawing.preview_opacity) {
            log::warn!(
                "Invalid preview_opacity {:.2}, clamping to 0.0-1.0 range",
                self.drawing.preview_opacity
            );
            self.drawing.preview_opacity = if self.drawing.preview_opacity.is_nan() {
                DrawingConfig::default().preview_opacity
            } else {
                self.drawing.preview_opacity.clamp(0.0, 1.0)
            };
        }

        if !(1..=240).contains(&self.performance.target_fps) {
            log::warn!(
                "Invalid target_fps {}, clamping to 1-240 range",
                self.performance.target_fps
            );
            self.performance.target_fps = self.performance.target_fps.clamp(1, 240);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        if let Err(err) = self.keybindings.build_action_map() {
            log::warn!("Invalid keybindings ({}), falling back to defaults", err);
            self.keybindings = KeybindingsConfig::default();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintbox/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintbox");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// With `explicit_path` set, that file must exist. Otherwise the default
    /// location is used and a missing file yields [`Config::default`]. All loaded
    /// values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file cannot be read (or an explicit path does not exist)
    /// - The file contains invalid TOML syntax
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::get_config_path()?;
                if !path.exists() {
                    info!("Config file not found, using defaults");
                    debug!("Expected config at: {}", path.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
