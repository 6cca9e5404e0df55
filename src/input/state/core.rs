//! Paint state: drawing parameters plus the stroke-in-progress.

use crate::config::{Action, BindingError, Config, KeyBinding};
use crate::draw::{PaletteColor, Shape};
use crate::input::{frame::FrameInput, mode::DrawMode};
use crate::util::Point;
use std::collections::HashMap;

/// Smallest brush size reachable with the decrease key.
pub const MIN_BRUSH_SIZE: f64 = 1.0;
/// Largest brush size reachable with the increase key.
pub const MAX_BRUSH_SIZE: f64 = 50.0;

/// Pointer gesture currently being drawn.
///
/// Lives only between a press and the matching release; nothing here is part
/// of the canvas until committed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stroke {
    /// Press position; in Free mode, the last committed trail point
    pub start: Point,
    /// Release position of the last finished stroke
    pub end: Point,
    /// Whether a gesture is active
    pub is_drawing: bool,
}

/// Main input state containing all drawing session state.
///
/// Holds the active mode, color and brush size together with the
/// stroke-in-progress. [`PaintState::update`] consumes one frame of input and
/// returns the shapes that must be committed to the canvas.
pub struct PaintState {
    /// Active drawing mode (F/L/C)
    pub mode: DrawMode,
    /// Active palette color (1-4)
    pub color: PaletteColor,
    /// Brush size in pixels, always within [`MIN_BRUSH_SIZE`, `MAX_BRUSH_SIZE`]
    pub brush_size: f64,
    /// Stroke-in-progress
    pub stroke: Stroke,
    /// Opacity applied to the live line/circle preview
    pub preview_opacity: f64,
    /// Whether the user requested to close the window
    pub should_exit: bool,
    /// Keybinding action map for lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl PaintState {
    /// Creates a new PaintState with the specified defaults.
    ///
    /// `brush_size` is clamped into the valid range.
    pub fn with_defaults(
        mode: DrawMode,
        color: PaletteColor,
        brush_size: f64,
        preview_opacity: f64,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            mode,
            color,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            stroke: Stroke::default(),
            preview_opacity,
            should_exit: false,
            action_map,
        }
    }

    /// Builds the initial state from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, BindingError> {
        let action_map = config.keybindings.build_action_map()?;
        Ok(Self::with_defaults(
            config.drawing.default_mode,
            config.drawing.default_color,
            config.drawing.default_brush_size,
            config.drawing.preview_opacity,
            action_map,
        ))
    }

    /// Stroke width used for line segments: twice the brush radius.
    pub fn stroke_width(&self) -> f64 {
        self.brush_size * 2.0
    }

    /// Processes one frame of input.
    ///
    /// Key presses are applied first (mode, color, brush size), then the pointer
    /// edges and the held-button trail. Returns the shapes to composite onto the
    /// canvas, in commit order.
    pub fn update(&mut self, input: &FrameInput) -> Vec<Shape> {
        self.apply_key_presses(&input.key_presses);

        let mut commits = Vec::new();
        self.handle_pointer(input, &mut commits);
        commits
    }

    pub(super) fn lookup(&self, binding: &KeyBinding) -> Option<Action> {
        self.action_map.get(binding).copied()
    }
}
