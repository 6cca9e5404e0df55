//! Generic input event types for cross-backend compatibility.

/// Generic key representation.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character key, already shifted by the keyboard layout ('+', 'F', '1')
    Char(char),
    /// Escape key
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used to look the key up in the keybinding map.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (unused)
    Right,
    /// Middle mouse button (unused)
    Middle,
}
