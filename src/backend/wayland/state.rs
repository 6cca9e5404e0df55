// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; owns the paint application and presents its frames.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell}, shm::Shm,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Instant;
use wayland_client::{
    QueueHandle,
    protocol::{wl_keyboard, wl_pointer, wl_shm},
};

use crate::{app::App, config::Config, input::InputCollector};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,
    pub(super) keyboard: Option<wl_keyboard::WlKeyboard>,
    pub(super) pointer: Option<wl_pointer::WlPointer>,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Paint application and the input gathered since the last tick
    pub(super) app: App,
    pub(super) input: InputCollector,

    // Loop control
    pub(super) frame_due: bool,
    pub(super) close_requested: bool,
    pub(super) signal_flag: Arc<AtomicBool>,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        app: App,
        signal_flag: Arc<AtomicBool>,
    ) -> Self {
        let width = app.canvas.width() as u32;
        let height = app.canvas.height() as u32;
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            keyboard: None,
            pointer: None,
            surface: SurfaceState::new(width, height),
            config,
            app,
            input: InputCollector::new(),
            frame_due: false,
            close_requested: false,
            signal_flag,
        }
    }

    /// Whether any close source fired: window close, exit key, or a signal.
    pub(super) fn should_exit(&self) -> bool {
        self.close_requested || self.app.should_exit() || self.signal_flag.load(Ordering::SeqCst)
    }

    /// Runs one frame: applies the collected input and commits to the canvas.
    pub(super) fn update(&mut self) -> Result<()> {
        let frame = self.input.take_frame();
        self.app.frame(&frame).context("Failed to apply frame input")
    }

    /// Whether a new frame may be presented now.
    pub(super) fn can_render(&self) -> bool {
        self.surface.is_configured() && !self.surface.frame_callback_pending()
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, pixels) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `pixels` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are dropped before the buffer is committed to Wayland
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                pixels.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;
        self.app.render(&ctx, width, height)?;

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        // Attach buffer and commit
        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);
        wl_surface.frame(qh, wl_surface.clone());
        wl_surface.commit();

        self.surface.set_frame_callback_pending(true);
        self.app.record_present(Instant::now());
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
