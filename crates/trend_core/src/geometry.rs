//! Point type and the three primitives the path compiler is built on.

use serde::{Deserialize, Serialize};

/// Tolerance for [`are_collinear`], expressed as `|sin(angle)|` between the two edges.
pub const COLLINEAR_EPSILON: f32 = 1e-5;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// Euclidean distance between `a` and `b`.
pub fn distance_between(a: Point, b: Point) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Whether `a`, `b` and `c` lie on one line.
///
/// The cross product of `b - a` and `c - a` is compared against the product of
/// both edge lengths, so the tolerance does not depend on the coordinate scale.
/// Any coincident pair counts as collinear.
pub fn are_collinear(a: Point, b: Point, c: Point) -> bool {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (acx, acy) = (c.x - a.x, c.y - a.y);
    let scale = abx.hypot(aby) * acx.hypot(acy);
    if scale == 0.0 {
        return true;
    }
    let cross = abx * acy - aby * acx;
    cross.abs() <= COLLINEAR_EPSILON * scale
}

/// Point on the segment from `anchor` toward `from`, `distance` away from `anchor`.
///
/// Callers keep `distance` within the segment length. When `from` and `anchor`
/// coincide there is no direction to move in and `anchor` is returned as-is.
pub fn move_toward(from: Point, anchor: Point, distance: f32) -> Point {
    let dx = from.x - anchor.x;
    let dy = from.y - anchor.y;
    let len = dx.hypot(dy);
    if len == 0.0 {
        return anchor;
    }
    Point::new(
        anchor.x + dx / len * distance,
        anchor.y + dy / len * distance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance_between(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance_between(Point::new(2.0, 2.0), Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn collinear_detects_straight_and_bent_runs() {
        let a = Point::new(0.0, 0.0);
        assert!(are_collinear(a, Point::new(1.0, 1.0), Point::new(5.0, 5.0)));
        assert!(are_collinear(a, Point::new(1.0, 0.0), Point::new(-3.0, 0.0)));
        assert!(!are_collinear(a, Point::new(1.0, 1.0), Point::new(2.0, 0.0)));
    }

    #[test]
    fn collinear_tolerance_scales_with_coordinates() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1000.0, 1000.0);
        let c = Point::new(2000.0, 2000.001);
        assert!(are_collinear(a, b, c));
        assert!(!are_collinear(
            Point::new(0.0, 0.0),
            Point::new(0.001, 0.001),
            Point::new(0.002, 0.0),
        ));
    }

    #[test]
    fn collinear_treats_coincident_points_as_straight() {
        let p = Point::new(1.0, 2.0);
        assert!(are_collinear(p, p, Point::new(4.0, 0.0)));
    }

    #[test]
    fn move_toward_walks_along_segment() {
        let anchor = Point::new(0.0, 0.0);
        let p = move_toward(Point::new(10.0, 0.0), anchor, 3.0);
        assert_eq!(p, Point::new(3.0, 0.0));

        let p = move_toward(Point::new(0.0, -8.0), Point::new(0.0, 2.0), 4.0);
        assert!((p.y - -2.0).abs() < 1e-6);
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn move_toward_coincident_returns_anchor() {
        let anchor = Point::new(5.0, 5.0);
        assert_eq!(move_toward(anchor, anchor, 2.0), anchor);
    }
}
