// Responds to xdg-toplevel configure/close events for the paint window.
use log::info;
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested by compositor");
        self.close_requested = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // The window is fixed-size; a suggested size only gets logged
        if !self.surface.is_configured() {
            info!(
                "Window configured: {}x{} (suggested {:?}x{:?})",
                self.surface.width(),
                self.surface.height(),
                configure.new_size.0,
                configure.new_size.1
            );
        }

        self.surface.set_configured(true);
    }
}
