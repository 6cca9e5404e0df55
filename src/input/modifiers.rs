//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Tracks which binding modifiers (Ctrl, Alt) are currently held. Shift is not
/// tracked: shifted symbols arrive as their own key (`'+'` rather than Shift+`'='`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl key held
    pub ctrl: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }
}
