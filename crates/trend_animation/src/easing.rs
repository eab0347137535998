//! CSS timing functions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnimationError;

/// Easing function type, named the way CSS `animation-timing-function` names them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Control points of the equivalent `cubic-bezier()`.
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        match *self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::Ease => (0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => (x1, y1, x2, y2),
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        if let Easing::Linear = self {
            return t.clamp(0.0, 1.0);
        }
        let (x1, y1, x2, y2) = self.control_points();
        cubic_bezier_ease(t, x1, y1, x2, y2)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::Ease => f.write_str("ease"),
            Easing::EaseIn => f.write_str("ease-in"),
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::EaseInOut => f.write_str("ease-in-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Easing {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "linear" => return Ok(Easing::Linear),
            "ease" => return Ok(Easing::Ease),
            "ease-in" => return Ok(Easing::EaseIn),
            "ease-out" => return Ok(Easing::EaseOut),
            "ease-in-out" => return Ok(Easing::EaseInOut),
            _ => {}
        }

        let args = name
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| AnimationError::UnknownEasing(s.to_string()))?;

        let nums = args
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| AnimationError::InvalidCubicBezier(s.to_string()))?;

        match nums.as_slice() {
            // x coordinates must stay within [0, 1] for the curve to be a function of time
            &[x1, y1, x2, y2] if (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2) => {
                Ok(Easing::CubicBezier(x1, y1, x2, y2))
            }
            _ => Err(AnimationError::InvalidCubicBezier(s.to_string())),
        }
    }
}

impl TryFrom<String> for Easing {
    type Error = AnimationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(value: Easing) -> Self {
        value.to_string()
    }
}

/// Residual at which a solved curve parameter is accepted.
const SOLVE_EPSILON: f64 = 1e-7;

/// Progress along a CSS `cubic-bezier()` curve with end points (0,0) and (1,1).
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let x_axis = BezierAxis::new(x1, x2);
    let y_axis = BezierAxis::new(y1, y2);
    y_axis.at(x_axis.solve(t as f64)) as f32
}

/// One coordinate of the curve as `((a*s + b)*s + c)*s`.
#[derive(Clone, Copy, Debug)]
struct BezierAxis {
    a: f64,
    b: f64,
    c: f64,
}

impl BezierAxis {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1 as f64;
        let b = 3.0 * (p2 as f64 - p1 as f64) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn at(&self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn slope(&self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Curve parameter at which this axis equals `target`.
    ///
    /// Newton steps converge in a few iterations on well-behaved curves; a
    /// flat slope falls back to bisection over `[0, 1]`.
    fn solve(&self, target: f64) -> f64 {
        let mut s = target;
        for _ in 0..8 {
            let err = self.at(s) - target;
            if err.abs() < SOLVE_EPSILON {
                return s;
            }
            let slope = self.slope(s);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = target;
        for _ in 0..30 {
            let value = self.at(s);
            if (value - target).abs() < SOLVE_EPSILON {
                break;
            }
            if value < target {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_names() {
        assert_eq!("ease".parse::<Easing>().unwrap(), Easing::Ease);
        assert_eq!("Ease-In-Out".parse::<Easing>().unwrap(), Easing::EaseInOut);
        assert_eq!(
            "cubic-bezier(0.1, 0.7, 1.0, 0.1)".parse::<Easing>().unwrap(),
            Easing::CubicBezier(0.1, 0.7, 1.0, 0.1)
        );
        assert!(matches!(
            "bounce".parse::<Easing>(),
            Err(AnimationError::UnknownEasing(_))
        ));
        assert!(matches!(
            "cubic-bezier(2, 0, 0, 1)".parse::<Easing>(),
            Err(AnimationError::InvalidCubicBezier(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        for e in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.5, -0.5, 0.25, 1.5),
        ] {
            assert_eq!(e.to_string().parse::<Easing>().unwrap(), e);
        }
    }

    #[test]
    fn serde_uses_css_text() {
        let e: Easing = serde_json::from_str("\"ease-out\"").unwrap();
        assert_eq!(e, Easing::EaseOut);
        assert_eq!(serde_json::to_string(&Easing::Ease).unwrap(), "\"ease\"");
        assert!(serde_json::from_str::<Easing>("\"wobble\"").is_err());
    }

    #[test]
    fn endpoints_are_exact() {
        for e in [Easing::Linear, Easing::Ease, Easing::EaseInOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
    }

    #[test]
    fn bezier_solver_matches_known_css_values() {
        // Midpoint of the symmetric ease-in-out curve.
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        // A linear-shaped bezier tracks its input.
        let straight = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for t in [0.1, 0.33, 0.8] {
            assert!((straight.apply(t) - t).abs() < 1e-4);
        }
        // `ease` rises quickly: roughly 0.8 by the halfway point.
        let mid = Easing::Ease.apply(0.5);
        assert!(mid > 0.75 && mid < 0.85, "ease(0.5) = {mid}");
    }

    #[test]
    fn ease_in_starts_slow() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
        assert!((Easing::Linear.apply(0.4) - 0.4).abs() < 1e-6);
    }
}
