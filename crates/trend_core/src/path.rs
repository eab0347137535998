//! Path building and the polyline / rounded-corner compilers

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::geometry::{are_collinear, distance_between, move_toward, Point};
use crate::TrendError;

/// Path command
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Smooth curve to `end`, pulled toward `control`.
    SmoothTo { control: Point, end: Point },
}

impl PathCommand {
    /// The point the pen rests on after this command.
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::SmoothTo { end, .. } => end,
        }
    }
}

/// A 2D path composed of commands. Non-empty paths always start with a `MoveTo`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// First and last pen positions.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        let first = self.commands.first()?.end();
        let last = self.commands.last()?.end();
        Some((first, last))
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.path.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.path.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn smooth_to(mut self, control: Point, end: Point) -> Self {
        self.path
            .commands
            .push(PathCommand::SmoothTo { control, end });
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// How an interior point of a smoothed path is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Corner {
    /// Last point of the path: plain line.
    Terminal,
    /// The path doesn't bend here: plain line.
    StraightRun,
    /// Rounded with the requested radius.
    FullRadius(f32),
    /// Rounded with half the shorter adjacent segment, which is smaller than
    /// the requested radius.
    ClampedRadius(f32),
}

impl Corner {
    /// Radius used to round this corner, if it is rounded at all.
    pub fn radius(&self) -> Option<f32> {
        match *self {
            Corner::Terminal | Corner::StraightRun => None,
            Corner::FullRadius(r) | Corner::ClampedRadius(r) => Some(r),
        }
    }
}

/// Decide how `point` is drawn, given its neighbours and the requested radius.
///
/// The radius never reaches past the midpoint of either adjacent segment.
pub fn classify_corner(prev: Point, point: Point, next: Option<Point>, radius: f32) -> Corner {
    let Some(next) = next else {
        return Corner::Terminal;
    };
    if are_collinear(prev, point, next) {
        return Corner::StraightRun;
    }

    let threshold = distance_between(prev, point).min(distance_between(next, point));
    let half = threshold / 2.0;
    if half >= radius {
        Corner::FullRadius(radius)
    } else {
        Corner::ClampedRadius(half)
    }
}

/// Polyline through `points`. Fewer than two points produce an empty path.
pub fn build_linear_path(points: &[Point]) -> Path {
    let Some((&first, rest)) = points.split_first() else {
        return Path::new();
    };
    if rest.is_empty() {
        trace!("build_linear_path: single point, nothing to draw");
        return Path::new();
    }

    rest.iter()
        .fold(PathBuilder::new().move_to(first), |b, &p| b.line_to(p))
        .build()
}

/// Polyline through `points` with every bend rounded by up to `radius`.
///
/// Each rounded corner becomes a line to the point `radius` before the corner
/// followed by a smooth curve, controlled by the corner, to the point `radius`
/// after it.
pub fn build_smooth_path(points: &[Point], radius: f32) -> Result<Path, TrendError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(TrendError::InvalidRadius(radius));
    }
    if points.len() < 2 {
        trace!(len = points.len(), "build_smooth_path: nothing to draw");
        return Ok(Path::new());
    }

    let mut builder = PathBuilder::new().move_to(points[0]);
    for i in 1..points.len() {
        let prev = points[i - 1];
        let point = points[i];
        let next = points.get(i + 1).copied();

        let corner = classify_corner(prev, point, next, radius);
        if let Corner::ClampedRadius(r) = corner {
            trace!(index = i, requested = radius, used = r, "corner radius clamped");
        }

        builder = match (corner.radius(), next) {
            (Some(r), Some(next)) => {
                let before = move_toward(prev, point, r);
                let after = move_toward(next, point, r);
                builder.line_to(before).smooth_to(point, after)
            }
            _ => builder.line_to(point),
        };
    }

    Ok(builder.build())
}
