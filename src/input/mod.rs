//! Input handling and paint state machine.
//!
//! This module translates backend keyboard and mouse events into drawing actions.
//! Events are collected per frame, then applied to the paint state, which owns the
//! drawing parameters (mode, color, brush size) and the stroke-in-progress.

pub mod events;
pub mod frame;
pub mod mode;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use frame::{FrameInput, InputCollector, KeyPress};
pub use mode::DrawMode;
pub use modifiers::Modifiers;
pub use state::{PaintState, Stroke};
