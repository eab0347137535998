//! Vertical gradient stops for the stroke

use trend_core::normalize;

/// A gradient stop
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: String,
}

/// Spread `colors` evenly over a top-to-bottom gradient.
///
/// The first colour sits at the bottom of the chart, next to the lowest
/// values, so stops are emitted in reverse. A single colour becomes one stop
/// at offset 0 (the zero-width index range is floored rather than dividing
/// by zero).
pub fn gradient_stops(colors: &[String]) -> Vec<GradientStop> {
    let last = colors.len().saturating_sub(1) as f32;
    colors
        .iter()
        .rev()
        .enumerate()
        .map(|(i, color)| GradientStop {
            offset: normalize(i as f32, 0.0, last, 0.0, 1.0),
            color: color.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn stops_are_reversed_and_evenly_spaced() {
        let stops = gradient_stops(&colors(&["#0ff", "#f0f", "#ff0"]));
        assert_eq!(
            stops,
            vec![
                GradientStop { offset: 0.0, color: "#ff0".into() },
                GradientStop { offset: 0.5, color: "#f0f".into() },
                GradientStop { offset: 1.0, color: "#0ff".into() },
            ]
        );
    }

    #[test]
    fn single_color_gets_offset_zero() {
        let stops = gradient_stops(&colors(&["purple"]));
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].offset, 0.0);
        assert!(gradient_stops(&[]).is_empty());
    }
}
