//! Cairo-based rendering functions for shapes and text labels.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::{Shape, StrokeCap};
use crate::util::Point;
use std::f64::consts::PI;

/// Renders all shapes in a collection to a Cairo context, in order.
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape type.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Disc {
            center,
            radius,
            color,
        } => render_disc(ctx, *center, *radius, *color),
        Shape::Segment {
            start,
            end,
            thick,
            color,
            cap,
        } => render_segment(ctx, *start, *end, *thick, *color, *cap),
        Shape::Ring {
            center,
            radius,
            color,
        } => render_ring(ctx, *center, *radius, *color),
    }
}

/// Render a filled disc
fn render_disc(ctx: &cairo::Context, center: Point, radius: f64, color: Color) {
    if radius <= 0.0 {
        return;
    }

    color.apply(ctx);
    ctx.new_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    let _ = ctx.fill();
}

/// Render a straight segment
fn render_segment(
    ctx: &cairo::Context,
    start: Point,
    end: Point,
    thick: f64,
    color: Color,
    cap: StrokeCap,
) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(match cap {
        StrokeCap::Butt => cairo::LineCap::Butt,
        StrokeCap::Round => cairo::LineCap::Round,
    });

    ctx.new_path();
    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();
}

/// Render a one-pixel circle outline
fn render_ring(ctx: &cairo::Context, center: Point, radius: f64, color: Color) {
    if radius <= 0.0 {
        return;
    }

    color.apply(ctx);
    ctx.set_line_width(1.0);
    ctx.new_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    let _ = ctx.stroke();
}

/// Fills an axis-aligned rectangle with a solid color.
pub fn fill_rect(ctx: &cairo::Context, x: f64, y: f64, width: f64, height: f64, color: Color) {
    color.apply(ctx);
    ctx.new_path();
    ctx.rectangle(x, y, width, height);
    let _ = ctx.fill();
}

/// Renders a single-line text label using Pango.
///
/// `(x, y)` is the top-left corner of the label's layout box and `size` is the
/// font height in pixels.
pub fn render_label(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    text: &str,
    size: f64,
    color: Color,
    font: &FontDescriptor,
) {
    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save().ok();

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.to_pango(size)));
    layout.set_text(text);

    color.apply(ctx);
    ctx.move_to(x, y);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}
