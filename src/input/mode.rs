//! Drawing mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing mode.
///
/// Selects how a pointer gesture is interpreted. Modes are switched with
/// discrete key presses and apply to both the in-progress and the next stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Freehand drawing - follows the pointer while the button is held (default)
    #[default]
    Free,
    /// Straight line from press position to release position
    Line,
    /// Filled circle centered at the press position, radius to the release position
    Circle,
}

impl DrawMode {
    /// Name shown in the toolbar.
    pub fn label(self) -> &'static str {
        match self {
            DrawMode::Free => "Free",
            DrawMode::Line => "Line",
            DrawMode::Circle => "Circle",
        }
    }
}
