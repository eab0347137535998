use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;
use trend_animation::AutoDraw;
use trend_core::{compile_points, normalize_dataset, validate_values, Bounds, Path, Point};

use crate::gradient::{gradient_stops, GradientStop};
use crate::highlight::{range_highlight, HighlightRect};
use crate::hover::HoverOverlay;
use crate::options::TrendOptions;
use crate::ChartError;

/// Offset applied to the first point of a flat line that carries a gradient.
/// A path with a zero-height bounding box can't be painted with a gradient.
const FLAT_GRADIENT_NUDGE: f32 = 0.0001;

static NEXT_TREND_ID: AtomicU64 = AtomicU64::new(1);

/// Fresh id for a chart, unique within the process.
///
/// Ids keep element ids and keyframe names apart when several charts share a
/// document.
pub fn next_trend_id() -> u64 {
    NEXT_TREND_ID.fetch_add(1, Ordering::Relaxed)
}

/// A dataset plus the options it is drawn with.
#[derive(Clone, Debug)]
pub struct Trend {
    id: u64,
    values: Vec<f32>,
    pub options: TrendOptions,
}

/// Everything a renderer needs to draw one trend.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendLayout {
    pub id: u64,
    pub view_box: (f32, f32),
    pub values: Vec<f32>,
    /// Normalized points, in view box coordinates.
    pub points: Vec<Point>,
    pub path: Path,
    pub gradient: Vec<GradientStop>,
    pub highlight: Option<HighlightRect>,
}

impl TrendLayout {
    /// Horizontal extent of the line as `(left, width)`.
    pub fn path_extent(&self) -> (f32, f32) {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.x, last.x - first.x),
            _ => (0.0, 0.0),
        }
    }

    pub fn gradient_id(&self) -> String {
        format!("trend-vertical-gradient-{}", self.id)
    }

    pub fn path_id(&self) -> String {
        format!("trend-{}", self.id)
    }
}

impl Trend {
    pub fn new(values: Vec<f32>) -> Self {
        Self::with_options(values, TrendOptions::default())
    }

    pub fn with_options(values: Vec<f32>, options: TrendOptions) -> Self {
        Self {
            id: next_trend_id(),
            values,
            options,
        }
    }

    /// Replace the generated id, e.g. for reproducible output.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.options.chart.smooth = smooth;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.options.chart.radius = radius;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.options.chart.padding = padding;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.options.chart.width = Some(width);
        self.options.chart.height = Some(height);
        self
    }

    pub fn gradient<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.options.chart.gradient = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn range_highlight(mut self, start: usize, end: usize) -> Self {
        self.options.highlight.range = Some([start, end]);
        self
    }

    pub fn auto_draw(mut self, enabled: bool) -> Self {
        self.options.auto_draw.enabled = enabled;
        self
    }

    /// Lay the chart out. `None` when there are fewer than two values to draw.
    pub fn layout(&self) -> Result<Option<TrendLayout>, ChartError> {
        if self.values.len() < 2 {
            debug!(id = self.id, len = self.values.len(), "Trend::layout: not enough data");
            return Ok(None);
        }
        validate_values(&self.values)?;

        let chart = &self.options.chart;
        let (w, h) = chart.view_box();
        let mut points = normalize_dataset(&self.values, Bounds::padded(w, h, chart.padding));

        let flat = self.values.iter().all(|&v| v == self.values[0]);
        if flat && !chart.gradient.is_empty() {
            points[0].y += FLAT_GRADIENT_NUDGE;
        }

        let path = compile_points(&points, chart.path_mode())?;

        let highlight = match self.options.highlight.range {
            Some([start, end]) => Some(range_highlight(&points, start, end, h)?),
            None => None,
        };

        Ok(Some(TrendLayout {
            id: self.id,
            view_box: (w, h),
            values: self.values.clone(),
            points,
            path,
            gradient: gradient_stops(&chart.gradient),
            highlight,
        }))
    }

    /// Stroke-reveal animation for `layout`, if enabled.
    pub fn auto_draw_for(&self, layout: &TrendLayout) -> Option<AutoDraw> {
        let opts = &self.options.auto_draw;
        opts.enabled.then(|| {
            AutoDraw::for_path(self.id, &layout.path, opts.duration_ms, opts.easing)
        })
    }

    /// A hover session for this chart's values, using the configured fade-out.
    pub fn hover_overlay(&self) -> HoverOverlay {
        HoverOverlay::new(
            self.values.clone(),
            Duration::from_millis(self.options.hover.fade_after_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trend_core::PathCommand;

    #[test]
    fn short_data_lays_out_nothing() {
        assert_eq!(Trend::new(vec![]).layout(), Ok(None));
        assert_eq!(Trend::new(vec![3.0]).layout(), Ok(None));
    }

    #[test]
    fn layout_uses_padded_inverted_view_box() {
        let layout = Trend::new(vec![0.0, 10.0]).layout().unwrap().unwrap();
        assert_eq!(layout.view_box, (300.0, 75.0));
        assert_eq!(
            layout.points,
            vec![Point::new(8.0, 67.0), Point::new(292.0, 8.0)]
        );
        assert_eq!(layout.path_extent(), (8.0, 284.0));
    }

    #[test]
    fn smooth_option_rounds_corners() {
        let layout = Trend::new(vec![1.0, 5.0, 2.0])
            .smooth(true)
            .radius(6.0)
            .layout()
            .unwrap()
            .unwrap();
        assert!(layout
            .path
            .commands()
            .iter()
            .any(|c| matches!(c, PathCommand::SmoothTo { .. })));
    }

    #[test]
    fn flat_gradient_line_is_nudged() {
        let plain = Trend::new(vec![2.0, 2.0, 2.0]).layout().unwrap().unwrap();
        assert!(plain.points.iter().all(|p| p.y == 67.0));

        let tinted = Trend::new(vec![2.0, 2.0, 2.0])
            .gradient(["#fff", "#000"])
            .layout()
            .unwrap()
            .unwrap();
        assert!(tinted.points[0].y > 67.0);
        assert_eq!(tinted.points[1].y, 67.0);
    }

    #[test]
    fn invalid_inputs_surface_as_errors() {
        let err = Trend::new(vec![1.0, f32::NAN]).layout().unwrap_err();
        assert!(matches!(err, ChartError::Core(_)));

        let err = Trend::new(vec![1.0, 2.0, 3.0])
            .smooth(true)
            .radius(-2.0)
            .layout()
            .unwrap_err();
        assert!(matches!(err, ChartError::Core(_)));

        let err = Trend::new(vec![1.0, 2.0])
            .range_highlight(0, 2)
            .layout()
            .unwrap_err();
        assert!(matches!(err, ChartError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn ids_are_unique_and_overridable() {
        let a = Trend::new(vec![1.0, 2.0]);
        let b = Trend::new(vec![1.0, 2.0]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.with_id(42).id(), 42);
    }

    #[test]
    fn auto_draw_follows_options() {
        let trend = Trend::new(vec![0.0, 10.0]).with_id(5);
        let layout = trend.layout().unwrap().unwrap();
        assert!(trend.auto_draw_for(&layout).is_none());

        let trend = trend.auto_draw(true);
        let draw = trend.auto_draw_for(&layout).unwrap();
        assert_eq!(draw.id, 5);
        assert_eq!(draw.duration_ms, 2000);
        assert!(draw.line_length > 284.0);
    }
}
