//! Geometry helpers shared by the input state machine and the renderer.

/// A position in surface-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
///
/// The result is used directly as a circle radius, so no squared-distance
/// shortcut is taken.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_three_four_five_triangle() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        for p in [
            Point::new(0.0, 0.0),
            Point::new(123.5, -7.25),
            Point::new(499.0, 499.0),
        ] {
            assert_eq!(distance(p, p), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(-5.0, 60.0);
        assert_eq!(distance(a, b), distance(b, a));
    }
}
