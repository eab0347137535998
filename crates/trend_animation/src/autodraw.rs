//! "Auto-draw" stroke reveal.
//!
//! The line is stroked as a single dash as long as the line itself, offset by
//! its full length, and the offset is animated down to zero. Once the reveal
//! finishes a second, 1ms animation clears the dash so later length changes
//! (new data, a different radius) can't leave a gap in the stroke.

use tracing::debug;
use trend_core::{path_length, Path};

use crate::easing::Easing;

/// Stroke-reveal animation for one chart path.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoDraw {
    /// Chart id; the animated element is `#trend-{id}`.
    pub id: u64,
    pub line_length: f32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl AutoDraw {
    pub fn new(id: u64, line_length: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            id,
            line_length: line_length.max(0.0),
            duration_ms,
            easing,
        }
    }

    /// Auto-draw sized to the rendered length of `path`.
    pub fn for_path(id: u64, path: &Path, duration_ms: u32, easing: Easing) -> Self {
        let line_length = path_length(path);
        debug!(id, line_length, duration_ms, "AutoDraw::for_path");
        Self::new(id, line_length, duration_ms, easing)
    }

    pub fn keyframes_name(&self) -> String {
        format!("trend-autodraw-{}", self.id)
    }

    pub fn cleanup_keyframes_name(&self) -> String {
        format!("trend-autodraw-cleanup-{}", self.id)
    }

    /// Stylesheet text for this animation.
    pub fn to_css(&self) -> String {
        let len = self.line_length;
        let draw = self.keyframes_name();
        let cleanup = self.cleanup_keyframes_name();
        let duration = self.duration_ms;
        let easing = self.easing;

        format!(
            "@keyframes {draw} {{\n  \
               0% {{ stroke-dasharray: {len}; stroke-dashoffset: {len}; }}\n  \
               100% {{ stroke-dasharray: {len}; stroke-dashoffset: 0; }}\n\
             }}\n\
             @keyframes {cleanup} {{\n  \
               to {{ stroke-dasharray: none; stroke-dashoffset: 0; }}\n\
             }}\n\
             #trend-{id} {{\n  \
               animation: {draw} {duration}ms {easing}, {cleanup} 1ms {duration}ms;\n\
             }}\n",
            id = self.id,
        )
    }

    /// `stroke-dashoffset` after `elapsed_ms`, for renderers that animate
    /// frames themselves instead of handing CSS to a browser.
    ///
    /// `None` once the reveal is over and the dash should be dropped.
    pub fn dash_offset_at(&self, elapsed_ms: f32) -> Option<f32> {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f32 {
            return None;
        }
        let t = (elapsed_ms / self.duration_ms as f32).max(0.0);
        Some(self.line_length * (1.0 - self.easing.apply(t)))
    }
}
