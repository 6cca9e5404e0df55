//! Library exports for the paintbox paint program.
//!
//! The backend-independent pieces (configuration, paint state, canvas and UI
//! rendering) are usable on plain Cairo image surfaces, which is how the
//! integration tests and the schema tool reach them. The Wayland backend lives
//! alongside them and is what the `paintbox` binary runs.

pub mod app;
pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::Config;
