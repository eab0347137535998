//! Dataset normalization: raw values -> points inside an output rectangle.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::TrendError;

/// Linearly rescale `value` from `[min, max]` into `[out_min, out_max]`.
///
/// A zero-width source range (flat data, a single gradient stop) floors the
/// denominator to 1, so `value == min` maps to `out_min` instead of NaN.
/// Either range may be descending.
pub fn normalize(value: f32, min: f32, max: f32, out_min: f32, out_max: f32) -> f32 {
    LinearScale::new(min, max, out_min, out_max).map(value)
}

/// Affine mapping from a data domain into an output range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    pub fn new(domain_min: f32, domain_max: f32, range_min: f32, range_max: f32) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    /// Spans are taken in `f64` so finite inputs near `f32::MAX` stay finite.
    pub fn map(&self, value: f32) -> f32 {
        let mut d = self.domain_max as f64 - self.domain_min as f64;
        if d == 0.0 {
            d = 1.0;
        }
        let t = (value as f64 - self.domain_min as f64) / d;
        let (r0, r1) = (self.range_min as f64, self.range_max as f64);
        (r0 + t * (r1 - r0)) as f32
    }
}

/// Output rectangle for [`normalize_dataset`].
///
/// `min_y` may be numerically greater than `max_y`; screen coordinates grow
/// downward, so charts pass the bottom edge as `min_y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounds for a `width` x `height` view box inset by `padding`, with the
    /// y axis flipped so larger values sit higher on screen.
    pub fn padded(width: f32, height: f32, padding: f32) -> Self {
        Self::new(padding, width - padding, height - padding, padding)
    }

    pub fn width(&self) -> f32 {
        (self.max_x - self.min_x).abs()
    }

    pub fn height(&self) -> f32 {
        (self.max_y - self.min_y).abs()
    }
}

/// Map `values` to evenly spaced points inside `bounds`.
///
/// `x` follows the index over `[0, n - 1]`; `y` follows the value over
/// `[min(values), max(values)]`. Flat data collapses onto `bounds.min_y`.
pub fn normalize_dataset(values: &[f32], bounds: Bounds) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }

    let (lo, hi) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let x_scale = LinearScale::new(0.0, (values.len() - 1) as f32, bounds.min_x, bounds.max_x);
    let y_scale = LinearScale::new(lo, hi, bounds.min_y, bounds.max_y);

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(x_scale.map(i as f32), y_scale.map(v)))
        .collect()
}

/// Reject NaN and infinite values before they reach the normalizer.
pub fn validate_values(values: &[f32]) -> Result<(), TrendError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TrendError::NonFiniteValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
