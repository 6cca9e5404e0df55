//! Configuration type definitions.

use crate::draw::PaletteColor;
use crate::input::DrawMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the drawing state when the window first opens. Users can change
/// mode, color and brush size at runtime using keybindings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial drawing mode (free, line, circle)
    #[serde(default)]
    pub default_mode: DrawMode,

    /// Initial palette color (black, red, blue, green)
    #[serde(default)]
    pub default_color: PaletteColor,

    /// Initial brush size in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: f64,

    /// Opacity of the live line/circle preview (valid range: 0.0 - 1.0)
    #[serde(default = "default_preview_opacity")]
    pub preview_opacity: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_mode: DrawMode::default(),
            default_color: PaletteColor::default(),
            default_brush_size: default_brush_size(),
            preview_opacity: default_preview_opacity(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control frame pacing and buffering. Most users won't need
/// to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Frames per second the input/render loop is capped at (valid range: 1 - 240)
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,

    /// Number of shared-memory buffers (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory)
    /// - 3 = triple buffering
    /// - 4 = quad buffering
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
            buffer_count: default_buffer_count(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the frames-per-second counter in the bottom-right corner
    #[serde(default = "default_show_fps")]
    pub show_fps: bool,

    /// Font family for toolbar and help text (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight for toolbar and help text (e.g., "normal", "bold")
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_fps: default_show_fps(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_brush_size() -> f64 {
    5.0
}

fn default_preview_opacity() -> f64 {
    0.6
}

fn default_target_fps() -> u32 {
    60
}

fn default_buffer_count() -> u32 {
    2
}

fn default_show_fps() -> bool {
    true
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}
