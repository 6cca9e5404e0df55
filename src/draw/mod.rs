//! Rendering primitives, the persistent canvas, and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`] / [`PaletteColor`]: RGBA colors and the four selectable drawing colors
//! - [`Shape`]: primitives that are committed to the canvas or drawn as previews
//! - [`Canvas`]: the off-screen raster holding every committed stroke
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod font;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::{Color, PaletteColor};
pub use font::FontDescriptor;
pub use render::{fill_rect, render_label, render_shape, render_shapes};
pub use shape::{Shape, StrokeCap};
