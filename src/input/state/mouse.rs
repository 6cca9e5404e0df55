use crate::draw::{Shape, StrokeCap};
use crate::input::{frame::FrameInput, mode::DrawMode};
use crate::util::{self, Point};
use log::debug;

use super::PaintState;

impl PaintState {
    /// Handles pointer edges and the held-button trail for one frame.
    ///
    /// Order matters: press, then release, then continuation. A press and
    /// release inside the same frame therefore never produce a trail segment.
    pub(super) fn handle_pointer(&mut self, input: &FrameInput, commits: &mut Vec<Shape>) {
        let pos = input.pointer;

        if input.pointer_pressed {
            self.begin_stroke(pos, commits);
        }

        if input.pointer_released {
            self.end_stroke(pos, commits);
        }

        if self.stroke.is_drawing && self.mode == DrawMode::Free && input.pointer_down {
            self.continue_stroke(pos, commits);
        }
    }

    /// Pointer went down: record the start and, in Free mode, dab a disc.
    fn begin_stroke(&mut self, pos: Point, commits: &mut Vec<Shape>) {
        debug!("Stroke started at ({:.0}, {:.0}) in {:?} mode", pos.x, pos.y, self.mode);
        self.stroke.start = pos;

        if self.mode == DrawMode::Free {
            commits.push(Shape::Disc {
                center: pos,
                radius: self.brush_size,
                color: self.color.to_color(),
            });
        }

        self.stroke.is_drawing = true;
    }

    /// Pointer went up: commit the line or circle for shape modes.
    fn end_stroke(&mut self, pos: Point, commits: &mut Vec<Shape>) {
        if !self.stroke.is_drawing {
            return;
        }

        self.stroke.end = pos;
        let start = self.stroke.start;

        match self.mode {
            DrawMode::Line => commits.push(Shape::Segment {
                start,
                end: pos,
                thick: self.stroke_width(),
                color: self.color.to_color(),
                cap: StrokeCap::Butt,
            }),
            DrawMode::Circle => commits.push(Shape::Disc {
                center: start,
                radius: util::distance(start, pos),
                color: self.color.to_color(),
            }),
            // Already committed piecewise while the button was held
            DrawMode::Free => {}
        }

        debug!("Stroke ended at ({:.0}, {:.0})", pos.x, pos.y);
        self.stroke.is_drawing = false;
    }

    /// Button held in Free mode: extend the trail to the current position.
    fn continue_stroke(&mut self, pos: Point, commits: &mut Vec<Shape>) {
        commits.push(Shape::Segment {
            start: self.stroke.start,
            end: pos,
            thick: self.stroke_width(),
            color: self.color.to_color(),
            cap: StrokeCap::Round,
        });
        self.stroke.start = pos;
    }
}
