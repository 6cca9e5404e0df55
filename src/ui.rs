//! UI rendering: toolbar, labels, help line, FPS counter, stroke preview

use crate::draw::color::{BLACK, DARK_GRAY, LIGHT_GRAY, LIME};
use crate::draw::{FontDescriptor, fill_rect, render_label, render_shape};
use crate::input::PaintState;
use crate::util::Point;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Toolbar strip height
pub const TOOLBAR_HEIGHT: f64 = 30.0;
/// Toolbar label text height
const LABEL_FONT_SIZE: f64 = 20.0;
/// Y position shared by all toolbar labels
const LABEL_Y: f64 = 5.0;
/// Title label X position
const TITLE_X: f64 = 5.0;
/// Mode label X position
const MODE_X: f64 = 135.0;
/// Brush size label X position
const SIZE_X: f64 = 220.0;

/// Title shown at the left of the toolbar
const TITLE_TEXT: &str = "Paint Time!";

/// Help line text
const HELP_TEXT: &str = "F:Free    L:Line    C:Circle    1-4:Colors    +/-:Size";
/// Help line text height
const HELP_FONT_SIZE: f64 = 10.0;
/// Help line X position
const HELP_X: f64 = 10.0;
/// Help line distance from the bottom edge
const HELP_BOTTOM_OFFSET: f64 = 20.0;

/// FPS counter text height
const FPS_FONT_SIZE: f64 = 20.0;
/// FPS counter distance from the right edge
const FPS_RIGHT_OFFSET: f64 = 85.0;
/// FPS counter distance from the bottom edge
const FPS_BOTTOM_OFFSET: f64 = 30.0;

/// Render the toolbar strip across the top of the window.
///
/// The strip is screen-only and is never composited into the canvas.
pub fn render_toolbar(ctx: &cairo::Context, screen_width: u32) {
    fill_rect(ctx, 0.0, 0.0, screen_width as f64, TOOLBAR_HEIGHT, LIGHT_GRAY);
}

/// Render the title, current mode and brush size over the toolbar
pub fn render_labels(ctx: &cairo::Context, state: &PaintState, font: &FontDescriptor) {
    render_label(ctx, TITLE_X, LABEL_Y, TITLE_TEXT, LABEL_FONT_SIZE, BLACK, font);
    render_label(ctx, MODE_X, LABEL_Y, state.mode.label(), LABEL_FONT_SIZE, BLACK, font);

    let size_text = format!("Size: {}", state.brush_size as i32);
    render_label(ctx, SIZE_X, LABEL_Y, &size_text, LABEL_FONT_SIZE, BLACK, font);
}

/// Render the translucent preview of the line or circle being dragged out
pub fn render_preview(ctx: &cairo::Context, state: &PaintState, pointer: Point) {
    if let Some(shape) = state.preview_shape(pointer) {
        render_shape(ctx, &shape);
    }
}

/// Render the key binding reminder along the bottom edge
pub fn render_help_line(ctx: &cairo::Context, screen_height: u32, font: &FontDescriptor) {
    let y = screen_height as f64 - HELP_BOTTOM_OFFSET;
    render_label(ctx, HELP_X, y, HELP_TEXT, HELP_FONT_SIZE, DARK_GRAY, font);
}

/// Render the frames-per-second counter in the bottom-right corner
pub fn render_fps(
    ctx: &cairo::Context,
    fps: u32,
    screen_width: u32,
    screen_height: u32,
    font: &FontDescriptor,
) {
    let x = screen_width as f64 - FPS_RIGHT_OFFSET;
    let y = screen_height as f64 - FPS_BOTTOM_OFFSET;
    let text = format!("{} FPS", fps);
    render_label(ctx, x, y, &text, FPS_FONT_SIZE, LIME, font);
}
