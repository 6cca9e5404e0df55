//! Backend-independent application core.
//!
//! [`App`] owns every piece of mutable paint state. The backend hands it one
//! [`FrameInput`] per tick and a Cairo context to render into; nothing here knows
//! about Wayland.

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::draw::color::SCREEN_BACKGROUND;
use crate::draw::{Canvas, FontDescriptor};
use crate::input::{FrameInput, PaintState};
use crate::ui;
use crate::util::Point;

/// Number of frame intervals averaged by [`FpsCounter`].
const FPS_SAMPLE_WINDOW: usize = 30;

/// Rolling frames-per-second estimate.
#[derive(Debug, Default)]
pub struct FpsCounter {
    last_tick: Option<Instant>,
    intervals: VecDeque<Duration>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a frame was produced at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            if self.intervals.len() == FPS_SAMPLE_WINDOW {
                self.intervals.pop_front();
            }
            self.intervals.push_back(now.saturating_duration_since(last));
        }
        self.last_tick = Some(now);
    }

    /// Average frame rate over the sample window, rounded to the nearest integer.
    pub fn fps(&self) -> u32 {
        let total: Duration = self.intervals.iter().sum();
        if total.is_zero() {
            return 0;
        }
        let average = total.as_secs_f64() / self.intervals.len() as f64;
        (1.0 / average).round() as u32
    }
}

/// The paint program: state, canvas and overlay settings.
pub struct App {
    /// Drawing parameters and the stroke-in-progress
    pub paint: PaintState,
    /// Persistent committed drawing
    pub canvas: Canvas,
    fps: FpsCounter,
    font: FontDescriptor,
    show_fps: bool,
    pointer: Point,
}

impl App {
    /// Creates the application with a white canvas of the given size.
    pub fn new(config: &Config, width: u32, height: u32) -> Result<Self> {
        let paint = PaintState::from_config(config).context("Invalid keybindings")?;
        let canvas = Canvas::new(width as i32, height as i32)?;

        info!(
            "Paint state ready: mode={}, color={}, brush={}px",
            paint.mode.label(),
            paint.color.name(),
            paint.brush_size
        );

        Ok(Self {
            paint,
            canvas,
            fps: FpsCounter::new(),
            font: FontDescriptor::new(
                config.ui.font_family.clone(),
                config.ui.font_weight.clone(),
            ),
            show_fps: config.ui.show_fps,
            pointer: Point::default(),
        })
    }

    /// Applies one frame of input and commits the resulting shapes to the canvas.
    pub fn frame(&mut self, input: &FrameInput) -> Result<()> {
        self.pointer = input.pointer;
        let commits = self.paint.update(input);
        if !commits.is_empty() {
            debug!("Frame committed {} shape(s)", commits.len());
        }
        self.canvas.commit(&commits)
    }

    /// Whether the user asked to close the window.
    pub fn should_exit(&self) -> bool {
        self.paint.should_exit
    }

    /// Records a presented frame for the FPS counter.
    pub fn record_present(&mut self, now: Instant) {
        self.fps.tick(now);
    }

    /// Renders the full screen: canvas, toolbar, labels, preview, help and FPS.
    pub fn render(&self, ctx: &cairo::Context, width: u32, height: u32) -> Result<()> {
        SCREEN_BACKGROUND.apply(ctx);
        ctx.paint().context("Failed to clear background")?;

        self.canvas.blit(ctx)?;

        ui::render_toolbar(ctx, width);
        ui::render_labels(ctx, &self.paint, &self.font);
        ui::render_preview(ctx, &self.paint, self.pointer);
        ui::render_help_line(ctx, height, &self.font);

        if self.show_fps {
            ui::render_fps(ctx, self.fps.fps(), width, height, &self.font);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyPress, Modifiers};

    fn test_app() -> App {
        let mut config = Config::default();
        config.ui.show_fps = false;
        App::new(&config, 100, 100).unwrap()
    }

    fn render_to_bytes(app: &App) -> Vec<u8> {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 100, 100).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            app.render(&ctx, 100, 100).unwrap();
        }
        surface.flush();
        surface.data().unwrap().to_vec()
    }

    #[test]
    fn fps_counter_averages_intervals() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        assert_eq!(counter.fps(), 0);

        for i in 0..=10 {
            counter.tick(start + Duration::from_millis(20 * i));
        }
        assert_eq!(counter.fps(), 50);
    }

    #[test]
    fn fps_counter_keeps_a_bounded_window() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();

        for i in 0..100 {
            counter.tick(start + Duration::from_millis(100 * i));
        }
        let base = start + Duration::from_millis(100 * 99);
        for i in 1..=FPS_SAMPLE_WINDOW as u64 {
            counter.tick(base + Duration::from_millis(10 * i));
        }
        assert_eq!(counter.fps(), 100);
    }

    #[test]
    fn render_is_idempotent_without_input() {
        let mut app = test_app();
        app.frame(&FrameInput {
            pointer: Point::new(50.0, 50.0),
            pointer_pressed: true,
            pointer_down: true,
            ..FrameInput::default()
        })
        .unwrap();

        let first = render_to_bytes(&app);
        let second = render_to_bytes(&app);
        assert_eq!(first, second);
    }

    #[test]
    fn frame_commits_to_canvas() {
        let mut app = test_app();
        app.frame(&FrameInput {
            pointer: Point::new(60.0, 60.0),
            pointer_pressed: true,
            pointer_released: true,
            ..FrameInput::default()
        })
        .unwrap();

        // Free-mode click leaves a black dab of brush radius
        assert_eq!(app.canvas.pixel(60, 60), Some((0, 0, 0)));
        assert_eq!(app.canvas.pixel(90, 90), Some((255, 255, 255)));
    }

    #[test]
    fn escape_frame_requests_exit() {
        let mut app = test_app();
        app.frame(&FrameInput {
            key_presses: vec![KeyPress {
                key: Key::Escape,
                modifiers: Modifiers::new(),
            }],
            ..FrameInput::default()
        })
        .unwrap();
        assert!(app.should_exit());
    }
}
