//! Chart options, mirrored one-to-one by the `trend.toml` sections.

use serde::{Deserialize, Serialize};
use trend_animation::Easing;
use trend_core::PathMode;

/// View box width used when no explicit width is set.
pub const DEFAULT_VIEW_BOX_WIDTH: f32 = 300.0;
/// View box height used when no explicit height is set (keeps a 4:1 aspect ratio).
pub const DEFAULT_VIEW_BOX_HEIGHT: f32 = 75.0;

/// Everything that shapes a rendered trend line.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TrendOptions {
    #[serde(default)]
    pub chart: ChartOptions,
    #[serde(default)]
    pub auto_draw: AutoDrawOptions,
    #[serde(default)]
    pub hover: HoverStyle,
    #[serde(default)]
    pub highlight: HighlightOptions,
}

/// Geometry and stroke
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChartOptions {
    /// Round the corners of the line
    #[serde(default)]
    pub smooth: bool,
    /// Corner radius for smooth lines, in view box units
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Inset between the view box edge and the line
    #[serde(default = "default_padding")]
    pub padding: f32,
    /// Fixed width. Without it the SVG fills its container horizontally.
    #[serde(default)]
    pub width: Option<f32>,
    /// Fixed height. Without it the SVG is a quarter as tall as it is wide.
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    /// Vertical gradient colours, top to bottom. Empty means a solid stroke.
    #[serde(default)]
    pub gradient: Vec<String>,
}

fn default_radius() -> f32 {
    10.0
}

fn default_padding() -> f32 {
    8.0
}

fn default_stroke() -> String {
    "black".to_string()
}

fn default_stroke_width() -> f32 {
    1.0
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            smooth: false,
            radius: default_radius(),
            padding: default_padding(),
            width: None,
            height: None,
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            gradient: Vec::new(),
        }
    }
}

impl ChartOptions {
    pub fn path_mode(&self) -> PathMode {
        if self.smooth {
            PathMode::Smooth {
                radius: self.radius,
            }
        } else {
            PathMode::Linear
        }
    }

    pub fn view_box(&self) -> (f32, f32) {
        (
            self.width.unwrap_or(DEFAULT_VIEW_BOX_WIDTH),
            self.height.unwrap_or(DEFAULT_VIEW_BOX_HEIGHT),
        )
    }

    /// `width` / `height` attributes of the outer `<svg>`.
    pub fn svg_size(&self) -> (String, String) {
        (
            self.width.map_or_else(|| "100%".to_string(), |w| w.to_string()),
            self.height.map_or_else(|| "25%".to_string(), |h| h.to_string()),
        )
    }
}

/// Stroke reveal on first render
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AutoDrawOptions {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    #[serde(default)]
    pub easing: Easing,
}

fn default_duration_ms() -> u32 {
    2000
}

impl Default for AutoDrawOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            duration_ms: default_duration_ms(),
            easing: Easing::Ease,
        }
    }
}

/// Hover readout text, vertical marker line, and fade-out delay
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HoverStyle {
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_text_size")]
    pub text_size: f32,
    #[serde(default = "default_text_weight")]
    pub text_weight: String,
    #[serde(default = "default_line_color")]
    pub line_color: String,
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    #[serde(default = "default_fade_after_ms")]
    pub fade_after_ms: u64,
}

fn default_text_color() -> String {
    "#aaa".to_string()
}

fn default_text_size() -> f32 {
    14.0
}

fn default_text_weight() -> String {
    "bold".to_string()
}

fn default_line_color() -> String {
    "red".to_string()
}

fn default_line_width() -> f32 {
    2.0
}

fn default_fade_after_ms() -> u64 {
    1000
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self {
            text_color: default_text_color(),
            text_size: default_text_size(),
            text_weight: default_text_weight(),
            line_color: default_line_color(),
            line_width: default_line_width(),
            fade_after_ms: default_fade_after_ms(),
        }
    }
}

/// Shaded band behind a range of data indices
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HighlightOptions {
    /// First and last highlighted data index
    #[serde(default)]
    pub range: Option<[usize; 2]>,
    #[serde(default = "default_highlight_color")]
    pub color: String,
}

fn default_highlight_color() -> String {
    "transparent".to_string()
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            range: None,
            color: default_highlight_color(),
        }
    }
}
