//! Rendered length of a path, used to size stroke-dash animations.

use crate::geometry::{distance_between, Point};
use crate::path::{Path, PathCommand};

/// Line segments used to flatten each smooth curve.
const CURVE_STEPS: usize = 24;

/// Total stroked length of `path`, as a vector renderer would draw it.
///
/// `S` curves are cubic in SVG: the first control point is the reflection of
/// the previous curve's second control point, or the current point when the
/// previous command was not a curve. Curves are measured by flattening.
pub fn path_length(path: &Path) -> f32 {
    let mut total = 0.0f32;
    let mut current = Point::ZERO;
    let mut last_control: Option<Point> = None;

    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                current = p;
                last_control = None;
            }
            PathCommand::LineTo(p) => {
                total += distance_between(current, p);
                current = p;
                last_control = None;
            }
            PathCommand::SmoothTo { control, end } => {
                let c1 = match last_control {
                    Some(prev) => Point::new(2.0 * current.x - prev.x, 2.0 * current.y - prev.y),
                    None => current,
                };
                total += cubic_length(current, c1, control, end);
                current = end;
                last_control = Some(control);
            }
        }
    }

    total
}

fn cubic_length(p0: Point, p1: Point, p2: Point, p3: Point) -> f32 {
    let mut len = 0.0f32;
    let mut prev = p0;
    for i in 1..=CURVE_STEPS {
        let t = i as f32 / CURVE_STEPS as f32;
        let p = cubic_point(p0, p1, p2, p3, t);
        len += distance_between(prev, p);
        prev = p;
    }
    len
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{build_smooth_path, PathBuilder};

    #[test]
    fn polyline_length_sums_segments() {
        let path = PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(3.0, 4.0))
            .line_to(Point::new(3.0, 10.0))
            .build();
        assert!((path_length(&path) - 11.0).abs() < 1e-5);
        assert_eq!(path_length(&Path::new()), 0.0);
    }

    #[test]
    fn rounded_corner_is_shorter_than_sharp_one() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let sharp = 20.0;
        let rounded = path_length(&build_smooth_path(&pts, 4.0).unwrap());
        assert!(rounded < sharp);
        // Straight parts alone are 6 + 6; the curve spans at least the 4*sqrt(2) chord.
        assert!(rounded > 12.0 + 4.0 * std::f32::consts::SQRT_2);
    }

    #[test]
    fn straight_curve_measures_like_a_line() {
        let path = PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .smooth_to(Point::new(5.0, 0.0), Point::new(10.0, 0.0))
            .build();
        assert!((path_length(&path) - 10.0).abs() < 1e-3);
    }
}
