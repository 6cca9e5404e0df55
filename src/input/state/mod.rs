mod actions;
mod core;
mod mouse;
mod preview;

pub use core::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PaintState, Stroke};
