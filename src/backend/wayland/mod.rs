//! Wayland backend: an xdg-shell toplevel window driven by a calloop event loop.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH, WaylandBackend};
