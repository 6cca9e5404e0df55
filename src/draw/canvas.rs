//! The persistent off-screen raster that owns every committed stroke.

use anyhow::{Context, Result};
use log::debug;

use super::color::WHITE;
use super::render::render_shapes;
use super::shape::Shape;

/// Off-screen drawing surface.
///
/// Committed shapes are composited directly into the raster and are not retained,
/// so the canvas contents are exactly the committed history. Preview rendering
/// never goes through this type.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Allocates an opaque canvas of the given size filled with white.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)
            .context("Failed to create canvas surface")?;

        {
            let ctx = cairo::Context::new(&surface).context("Failed to create canvas context")?;
            WHITE.apply(&ctx);
            ctx.paint().context("Failed to clear canvas")?;
        }

        debug!("Created {}x{} canvas", width, height);
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Permanently composites `shapes` onto the canvas, in order.
    pub fn commit(&mut self, shapes: &[Shape]) -> Result<()> {
        if shapes.is_empty() {
            return Ok(());
        }

        let ctx = cairo::Context::new(&self.surface).context("Failed to create canvas context")?;
        debug!("Committing {} shape(s): {:?}", shapes.len(), shapes);
        render_shapes(&ctx, shapes);
        drop(ctx);
        self.surface.flush();
        Ok(())
    }

    /// Paints the canvas onto `ctx` with its top-left corner at the origin, opaque.
    ///
    /// Cairo image surfaces and the presented buffer share top-down row order, so
    /// this is a straight copy.
    pub fn blit(&self, ctx: &cairo::Context) -> Result<()> {
        ctx.save().context("Failed to save context")?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(&self.surface, 0.0, 0.0)
            .context("Failed to set canvas as source")?;
        ctx.rectangle(0.0, 0.0, self.width as f64, self.height as f64);
        ctx.fill().context("Failed to blit canvas")?;
        ctx.restore().context("Failed to restore context")?;
        Ok(())
    }

    /// Returns the `(r, g, b)` value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        Some((
            ((word >> 16) & 0xff) as u8,
            ((word >> 8) & 0xff) as u8,
            (word & 0xff) as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, GREEN};
    use crate::draw::shape::StrokeCap;
    use crate::util::Point;

    #[test]
    fn new_canvas_is_white() {
        let mut canvas = Canvas::new(32, 32).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some((255, 255, 255)));
        assert_eq!(canvas.pixel(31, 31), Some((255, 255, 255)));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        assert_eq!(canvas.pixel(8, 0), None);
        assert_eq!(canvas.pixel(-1, 3), None);
    }

    #[test]
    fn commit_persists_across_commits() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas
            .commit(&[Shape::Disc {
                center: Point::new(20.0, 20.0),
                radius: 5.0,
                color: BLUE,
            }])
            .unwrap();
        canvas
            .commit(&[Shape::Segment {
                start: Point::new(50.0, 80.0),
                end: Point::new(90.0, 80.0),
                thick: 6.0,
                color: GREEN,
                cap: StrokeCap::Butt,
            }])
            .unwrap();

        assert_eq!(canvas.pixel(20, 20), Some((0, 121, 241)));
        assert_eq!(canvas.pixel(70, 80), Some((0, 228, 48)));
        assert_eq!(canvas.pixel(5, 95), Some((255, 255, 255)));
    }

    #[test]
    fn blit_copies_canvas_at_origin() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas
            .commit(&[Shape::Disc {
                center: Point::new(10.0, 30.0),
                radius: 4.0,
                color: BLUE,
            }])
            .unwrap();

        let target = cairo::ImageSurface::create(cairo::Format::ARgb32, 40, 40).unwrap();
        {
            let ctx = cairo::Context::new(&target).unwrap();
            canvas.blit(&ctx).unwrap();
        }

        let mut copy = Canvas {
            surface: cairo::ImageSurface::create(cairo::Format::Rgb24, 40, 40).unwrap(),
            width: 40,
            height: 40,
        };
        {
            let ctx = cairo::Context::new(&copy.surface).unwrap();
            ctx.set_source_surface(&target, 0.0, 0.0).unwrap();
            ctx.paint().unwrap();
        }
        // Row order is preserved: the disc stays near the bottom-left.
        assert_eq!(copy.pixel(10, 30), Some((0, 121, 241)));
        assert_eq!(copy.pixel(10, 9), Some((255, 255, 255)));
    }
}
