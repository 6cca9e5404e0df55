//! Primitive shapes committed to the canvas or drawn as screen-only previews.

use super::color::Color;
use crate::util::Point;

/// End cap used when stroking a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat end exactly at the endpoint (straight-line tool)
    Butt,
    /// Half-disc past the endpoint so consecutive freehand segments join smoothly
    Round,
}

/// Represents a drawable primitive.
///
/// Shapes are immediate-mode: once composited onto the canvas they are not retained.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled disc (freehand dab or committed circle)
    Disc {
        /// Disc center
        center: Point,
        /// Radius in pixels
        radius: f64,
        /// Fill color
        color: Color,
    },
    /// Straight segment (freehand trail piece or committed line)
    Segment {
        /// Starting point
        start: Point,
        /// Ending point
        end: Point,
        /// Full stroke width in pixels
        thick: f64,
        /// Stroke color
        color: Color,
        /// End cap style
        cap: StrokeCap,
    },
    /// One-pixel circle outline (circle preview)
    Ring {
        /// Ring center
        center: Point,
        /// Radius in pixels
        radius: f64,
        /// Outline color
        color: Color,
    },
}
