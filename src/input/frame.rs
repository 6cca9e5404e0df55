//! Per-frame input sampling.
//!
//! Backend events arrive whenever the compositor sends them. They are folded into
//! an [`InputCollector`] and handed to the state machine once per frame as a
//! [`FrameInput`], which separates edge-triggered events (a key went down, the
//! button went down/up) from level state (the button is held, where the pointer is).

use super::events::{Key, MouseButton};
use super::modifiers::Modifiers;
use crate::util::Point;

/// One key-down transition with the modifiers held at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

/// Snapshot of everything that happened to the input devices since the last frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Key-down transitions, in arrival order (repeats excluded)
    pub key_presses: Vec<KeyPress>,
    /// Pointer position at the end of the frame
    pub pointer: Point,
    /// Primary button went down during the frame
    pub pointer_pressed: bool,
    /// Primary button went up during the frame
    pub pointer_released: bool,
    /// Primary button is held at the end of the frame
    pub pointer_down: bool,
}

impl FrameInput {
    /// A frame with no events and the pointer resting at `pointer`.
    pub fn idle(pointer: Point) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }
}

/// Accumulates backend events between frames.
#[derive(Debug, Default)]
pub struct InputCollector {
    pending: FrameInput,
    modifiers: Modifiers,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a physical key-down transition.
    ///
    /// Auto-repeat must not be routed here; holding a key fires exactly once.
    pub fn on_key_press(&mut self, key: Key) {
        if key == Key::Unknown {
            return;
        }
        self.pending.key_presses.push(KeyPress {
            key,
            modifiers: self.modifiers,
        });
    }

    /// Updates the held modifier state.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Records a new pointer position.
    pub fn on_pointer_motion(&mut self, position: Point) {
        self.pending.pointer = position;
    }

    /// Records a button press; only the primary button is tracked.
    pub fn on_button_press(&mut self, button: MouseButton, position: Point) {
        self.pending.pointer = position;
        if button == MouseButton::Left {
            self.pending.pointer_pressed = true;
            self.pending.pointer_down = true;
        }
    }

    /// Records a button release; only the primary button is tracked.
    pub fn on_button_release(&mut self, button: MouseButton, position: Point) {
        self.pending.pointer = position;
        if button == MouseButton::Left {
            self.pending.pointer_released = true;
            self.pending.pointer_down = false;
        }
    }

    /// Returns the input for the frame that just ended and starts a new one.
    ///
    /// Edge flags and key presses are cleared; pointer position and the held
    /// button carry over.
    pub fn take_frame(&mut self) -> FrameInput {
        let next = FrameInput {
            pointer: self.pending.pointer,
            pointer_down: self.pending.pointer_down,
            ..FrameInput::default()
        };
        std::mem::replace(&mut self.pending, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_frame_clears_edges_but_keeps_levels() {
        let mut collector = InputCollector::new();
        collector.on_button_press(MouseButton::Left, Point::new(4.0, 5.0));
        collector.on_key_press(Key::Char('f'));

        let first = collector.take_frame();
        assert!(first.pointer_pressed);
        assert!(first.pointer_down);
        assert_eq!(first.key_presses.len(), 1);

        let second = collector.take_frame();
        assert!(!second.pointer_pressed);
        assert!(second.pointer_down);
        assert!(second.key_presses.is_empty());
        assert_eq!(second.pointer, Point::new(4.0, 5.0));
    }

    #[test]
    fn click_within_one_frame_reports_both_edges() {
        let mut collector = InputCollector::new();
        collector.on_button_press(MouseButton::Left, Point::new(1.0, 1.0));
        collector.on_button_release(MouseButton::Left, Point::new(2.0, 2.0));

        let frame = collector.take_frame();
        assert!(frame.pointer_pressed);
        assert!(frame.pointer_released);
        assert!(!frame.pointer_down);
        assert_eq!(frame.pointer, Point::new(2.0, 2.0));
    }

    #[test]
    fn secondary_buttons_are_ignored() {
        let mut collector = InputCollector::new();
        collector.on_button_press(MouseButton::Right, Point::new(3.0, 3.0));

        let frame = collector.take_frame();
        assert!(!frame.pointer_pressed);
        assert!(!frame.pointer_down);
        assert_eq!(frame.pointer, Point::new(3.0, 3.0));
    }

    #[test]
    fn key_presses_capture_modifiers() {
        let mut collector = InputCollector::new();
        collector.set_modifiers(Modifiers {
            ctrl: true,
            alt: false,
        });
        collector.on_key_press(Key::Char('q'));
        collector.on_key_press(Key::Unknown);

        let frame = collector.take_frame();
        assert_eq!(frame.key_presses.len(), 1);
        assert!(frame.key_presses[0].modifiers.ctrl);
    }
}
