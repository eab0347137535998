//! trend_chart
//!
//! Sparkline charts built on the `trend_core` geometry engine.
//!
//! The geometry is pure; everything stateful lives here and is owned
//! explicitly:
//! - [`Trend`] turns a dataset plus [`TrendOptions`] into a [`TrendLayout`]
//! - [`HoverOverlay`] holds per-session hover readout state and its fade-out deadline
//! - [`StyleRegistry`] is the one process-wide stylesheet for auto-draw keyframes
//! - [`render_svg`] draws a layout as a standalone SVG document, and
//!   [`render_svg_frame`] draws one still frame of the auto-draw reveal

mod data;
mod error;
mod gradient;
mod highlight;
mod hover;
mod options;
mod stylesheet;
mod svg;
mod trend;

pub use data::{plain_values, DataPoint};
pub use error::ChartError;
pub use gradient::{gradient_stops, GradientStop};
pub use highlight::{range_highlight, HighlightRect};
pub use hover::{HoverOverlay, HoverReadout};
pub use options::{
    AutoDrawOptions, ChartOptions, HighlightOptions, HoverStyle, TrendOptions,
    DEFAULT_VIEW_BOX_HEIGHT, DEFAULT_VIEW_BOX_WIDTH,
};
pub use stylesheet::StyleRegistry;
pub use svg::{render_svg, render_svg_frame, render_svg_with_hover};
pub use trend::{next_trend_id, Trend, TrendLayout};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::data::DataPoint;
    pub use crate::hover::{HoverOverlay, HoverReadout};
    pub use crate::options::TrendOptions;
    pub use crate::svg::render_svg;
    pub use crate::trend::{Trend, TrendLayout};
    pub use trend_animation::Easing;
    pub use trend_core::{Bounds, Path, PathMode, Point};
}
