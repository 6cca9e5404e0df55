use crate::config::{Action, KeyBinding};
use crate::draw::PaletteColor;
use crate::input::{frame::KeyPress, mode::DrawMode};
use log::debug;
use std::collections::HashSet;

use super::PaintState;
use super::core::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

impl PaintState {
    /// Resolves a key press to its bound action, if any.
    pub(super) fn find_action(&self, press: &KeyPress) -> Option<Action> {
        let name = press.key.binding_name()?;
        let binding =
            KeyBinding::from_pressed(&name, press.modifiers.ctrl, press.modifiers.alt);
        self.lookup(&binding)
    }

    /// Applies the key presses of one frame.
    ///
    /// Each group is an if/else-if chain: when several keys of the same group
    /// were pressed in one frame, only the first in priority order takes effect
    /// (Free, Line, Circle; Black, Red, Blue, Green; increase, decrease).
    pub fn apply_key_presses(&mut self, presses: &[KeyPress]) {
        let fired: HashSet<Action> = presses
            .iter()
            .filter_map(|press| self.find_action(press))
            .collect();

        if fired.is_empty() {
            return;
        }
        debug!("Actions this frame: {:?}", fired);

        if fired.contains(&Action::Exit) {
            self.should_exit = true;
        }

        if fired.contains(&Action::FreeMode) {
            self.mode = DrawMode::Free;
        } else if fired.contains(&Action::LineMode) {
            self.mode = DrawMode::Line;
        } else if fired.contains(&Action::CircleMode) {
            self.mode = DrawMode::Circle;
        }

        if fired.contains(&Action::ColorBlack) {
            self.color = PaletteColor::Black;
        } else if fired.contains(&Action::ColorRed) {
            self.color = PaletteColor::Red;
        } else if fired.contains(&Action::ColorBlue) {
            self.color = PaletteColor::Blue;
        } else if fired.contains(&Action::ColorGreen) {
            self.color = PaletteColor::Green;
        }

        if fired.contains(&Action::IncreaseBrush) && self.brush_size < MAX_BRUSH_SIZE {
            self.brush_size += 1.0;
            debug!("Brush size increased: {:.0}px", self.brush_size);
        } else if fired.contains(&Action::DecreaseBrush) && self.brush_size > MIN_BRUSH_SIZE {
            self.brush_size -= 1.0;
            debug!("Brush size decreased: {:.0}px", self.brush_size);
        }
    }
}
