use anyhow::Result;

use crate::config::Config;

pub mod wayland;

/// Run the Wayland backend with its full event loop until the window is closed.
pub fn run_wayland(config: Config) -> Result<()> {
    wayland::WaylandBackend::new(config).run()
}
