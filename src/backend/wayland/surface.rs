//! Manages the toplevel window and shared memory buffers for the Wayland backend.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};

/// Tracks the toplevel window, buffer pool, and associated sizing state.
pub struct SurfaceState {
    window: Option<Window>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates a new, unconfigured surface state with a fixed buffer size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window: None,
            pool: None,
            width,
            height,
            configured: false,
            frame_callback_pending: false,
        }
    }

    /// Assigns the window produced during startup.
    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    /// Returns the current window, if initialized.
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Marks the surface as configured by the compositor.
    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Returns whether the surface has completed its initial configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Sets the frame callback pending flag.
    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    /// Returns whether a frame callback is currently outstanding.
    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a shared memory pool of the appropriate size exists.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let buffer_size = (self.width * self.height * 4) as usize;
            let pool_size = buffer_size * buffer_count;
            info!(
                "Creating new SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}
