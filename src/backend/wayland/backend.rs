// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result, anyhow};
use calloop::{
    EventLoop,
    timer::{TimeoutAction, Timer},
};
use log::{debug, info, warn};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    reexports::calloop_wayland_source::WaylandSource,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::Shm,
};
use std::sync::{Arc, atomic::AtomicBool};
use std::time::Duration;
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{app::App, config::Config};

/// Fixed window width in pixels
pub const WINDOW_WIDTH: u32 = 500;
/// Fixed window height in pixels
pub const WINDOW_HEIGHT: u32 = 500;
/// Window title
pub const WINDOW_TITLE: &str = "Paint Program";
/// Application id reported to the compositor
const APP_ID: &str = "paintbox";

/// Give up after this many render failures in a row.
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    config: Config,
}

impl WaylandBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        debug!("Initialized output state");

        let seat_state = SeatState::new(&globals, &qh);
        debug!("Initialized seat state");

        let registry_state = RegistryState::new(&globals);

        debug!("  Mode: {:?}", self.config.drawing.default_mode);
        debug!("  Color: {:?}", self.config.drawing.default_color);
        debug!("  Brush size: {:.0}px", self.config.drawing.default_brush_size);
        debug!("  Target FPS: {}", self.config.performance.target_fps);
        debug!("  Buffer count: {}", self.config.performance.buffer_count);

        let app = App::new(&self.config, WINDOW_WIDTH, WINDOW_HEIGHT)?;

        // Signal handlers only raise a flag; the loop observes it between dispatches
        let signal_flag = Arc::new(AtomicBool::new(false));
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&signal_flag))
                .context("Failed to register signal handler")?;
        }

        let frame_interval =
            Duration::from_secs_f64(1.0 / f64::from(self.config.performance.target_fps));

        // Create application state
        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            self.config,
            app,
            signal_flag,
        );

        // Create the toplevel window
        info!("Creating {}x{} window", WINDOW_WIDTH, WINDOW_HEIGHT);
        let wl_surface = state.compositor_state.create_surface(&qh);
        let window =
            state
                .xdg_shell
                .create_window(wl_surface, WindowDecorations::RequestServer, &qh);
        window.set_title(WINDOW_TITLE);
        window.set_app_id(APP_ID);
        window.set_min_size(Some((WINDOW_WIDTH, WINDOW_HEIGHT)));
        window.set_max_size(Some((WINDOW_WIDTH, WINDOW_HEIGHT)));

        // Commit without a buffer to request the initial configure
        window.commit();

        state.surface.set_window(window);
        info!("Window created");

        // Event loop: Wayland events plus a fixed-rate frame timer
        let mut event_loop: EventLoop<WaylandState> =
            EventLoop::try_new().context("Failed to create event loop")?;
        let loop_handle = event_loop.handle();

        WaylandSource::new(conn.clone(), event_queue)
            .insert(loop_handle.clone())
            .map_err(|e| anyhow!("Failed to insert Wayland source: {}", e.error))?;

        loop_handle
            .insert_source(Timer::from_duration(frame_interval), move |_, _, state| {
                state.frame_due = true;
                TimeoutAction::ToDuration(frame_interval)
            })
            .map_err(|e| anyhow!("Failed to insert frame timer: {}", e.error))?;
        debug!("Frame timer armed at {:?}", frame_interval);

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.should_exit() {
                info!("Exit requested, breaking event loop");
                break;
            }

            if let Err(e) = event_loop.dispatch(None, &mut state) {
                warn!("Event loop error: {}", e);
                loop_error = Some(anyhow!("Wayland event loop error: {}", e));
                break;
            }

            if !state.frame_due {
                continue;
            }
            state.frame_due = false;

            state.update()?;

            // Input still applies while a frame is in flight; only presentation waits
            if !state.can_render() {
                debug!("Main loop: Skipping render - frame callback pending or not configured");
                continue;
            }

            match state.render(&qh) {
                Ok(()) => {
                    // Reset failure counter on successful render
                    consecutive_render_failures = 0;
                }
                Err(e) => {
                    consecutive_render_failures += 1;
                    warn!(
                        "Rendering error (attempt {}/{}): {}",
                        consecutive_render_failures, MAX_RENDER_FAILURES, e
                    );

                    if consecutive_render_failures >= MAX_RENDER_FAILURES {
                        return Err(anyhow!(
                            "Too many consecutive render failures ({}), exiting: {}",
                            consecutive_render_failures,
                            e
                        ));
                    }
                }
            }
        }

        info!("Wayland backend exiting");

        // Return error if loop exited due to error, otherwise success
        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
