use crate::draw::{Shape, StrokeCap};
use crate::input::mode::DrawMode;
use crate::util::{self, Point};

use super::PaintState;

impl PaintState {
    /// Returns the screen-only preview of the shape a release at `pointer` would commit.
    ///
    /// Only Line and Circle strokes have a preview; Free strokes are committed as
    /// they are drawn. The preview is never composited into the canvas.
    pub fn preview_shape(&self, pointer: Point) -> Option<Shape> {
        if !self.stroke.is_drawing {
            return None;
        }

        let color = self.color.to_color().fade(self.preview_opacity);
        let start = self.stroke.start;

        match self.mode {
            DrawMode::Line => Some(Shape::Segment {
                start,
                end: pointer,
                thick: self.stroke_width(),
                color,
                cap: StrokeCap::Butt,
            }),
            DrawMode::Circle => Some(Shape::Ring {
                center: start,
                radius: util::distance(start, pointer),
                color,
            }),
            DrawMode::Free => None,
        }
    }
}
