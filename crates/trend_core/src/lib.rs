//! trend_core
//!
//! Geometry engine behind Trend sparklines.
//!
//! The pipeline is deliberately small and stateless:
//! - **Normalizer**: raw values -> evenly spaced points inside a caller-supplied [`Bounds`]
//! - **Path compiler**: points -> [`Path`] (polyline or rounded corners)
//! - **Path syntax**: [`Path`] <-> `M`/`L`/`S` path data for vector renderers
//!
//! # Example
//!
//! ```rust
//! use trend_core::{compile, Bounds, PathMode};
//!
//! let bounds = Bounds::new(0.0, 3.0, 10.0, 0.0);
//! let path = compile(&[1.0, 2.0, 1.0, 2.0], bounds, PathMode::Linear).unwrap();
//!
//! assert_eq!(path.to_svg_d(), "M 0,10\nL 1,0\nL 2,10\nL 3,0");
//! ```

mod error;

pub mod geometry;
pub mod measure;
pub mod normalize;
pub mod path;
pub mod syntax;

pub use error::TrendError;
pub use geometry::{are_collinear, distance_between, move_toward, Point};
pub use measure::path_length;
pub use normalize::{normalize, normalize_dataset, validate_values, Bounds, LinearScale};
pub use path::{
    build_linear_path, build_smooth_path, classify_corner, Corner, Path, PathBuilder,
    PathCommand,
};
pub use syntax::parse_svg_d;

use serde::{Deserialize, Serialize};

/// How normalized points are joined into a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PathMode {
    /// Straight segments between every point.
    #[default]
    Linear,
    /// Straight segments with rounded interior corners.
    Smooth { radius: f32 },
}

/// Normalize `values` into `bounds` and compile them into a path.
///
/// Datasets with fewer than two values produce an empty path.
pub fn compile(values: &[f32], bounds: Bounds, mode: PathMode) -> Result<Path, TrendError> {
    validate_values(values)?;
    compile_points(&normalize_dataset(values, bounds), mode)
}

/// Compile already-normalized points into a path.
pub fn compile_points(points: &[Point], mode: PathMode) -> Result<Path, TrendError> {
    match mode {
        PathMode::Linear => Ok(build_linear_path(points)),
        PathMode::Smooth { radius } => build_smooth_path(points, radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_rejects_non_finite_values() {
        let err = compile(&[1.0, f32::NAN], Bounds::new(0.0, 1.0, 0.0, 1.0), PathMode::Linear)
            .unwrap_err();
        assert!(matches!(err, TrendError::NonFiniteValue { index: 1, .. }));
    }

    #[test]
    fn compile_smooth_rejects_negative_radius() {
        let err = compile(
            &[1.0, 2.0, 1.0],
            Bounds::new(0.0, 1.0, 0.0, 1.0),
            PathMode::Smooth { radius: -1.0 },
        )
        .unwrap_err();
        assert_eq!(err, TrendError::InvalidRadius(-1.0));
    }

    #[test]
    fn path_mode_round_trips_through_json() {
        let mode: PathMode = serde_json::from_str(r#"{"mode":"smooth","radius":4.0}"#).unwrap();
        assert_eq!(mode, PathMode::Smooth { radius: 4.0 });
        assert_eq!(PathMode::default(), PathMode::Linear);
    }
}
