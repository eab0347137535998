use std::time::{Duration, Instant};

use tracing::trace;
use trend_core::normalize;

/// What the hover overlay currently shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverReadout {
    pub index: usize,
    pub value: f32,
    /// Marker line position as a percentage of the SVG width.
    pub line_x_percent: f32,
}

/// Mutable hover session for one rendered chart.
///
/// Pointer positions are in SVG-local pixels. The readout hides itself
/// `fade_after` the last hover, or immediately when the pointer leaves the
/// horizontal extent of the line. Time is passed in by the caller.
#[derive(Clone, Debug)]
pub struct HoverOverlay {
    values: Vec<f32>,
    fade_after: Duration,
    readout: Option<HoverReadout>,
    hide_at: Option<Instant>,
}

impl HoverOverlay {
    pub fn new(values: Vec<f32>, fade_after: Duration) -> Self {
        Self {
            values,
            fade_after,
            readout: None,
            hide_at: None,
        }
    }

    pub fn readout(&self) -> Option<&HoverReadout> {
        self.readout.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.readout.is_some()
    }

    /// Pending fade-out deadline, if the readout is showing.
    pub fn hide_at(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Track the pointer.
    ///
    /// `path_left` and `path_width` describe where the line is drawn inside
    /// the SVG, which is `svg_width` pixels wide.
    pub fn on_mouse_move(
        &mut self,
        x: f32,
        svg_width: f32,
        path_left: f32,
        path_width: f32,
        now: Instant,
    ) -> Option<&HoverReadout> {
        let inside = x >= path_left && x <= path_left + path_width;
        if !inside || self.values.is_empty() || path_width <= 0.0 || svg_width <= 0.0 {
            self.hide();
            return None;
        }

        let last = self.values.len() - 1;
        let pos = normalize(x - path_left, 0.0, path_width, 0.0, last as f32);
        let index = (pos.round().max(0.0) as usize).min(last);

        self.readout = Some(HoverReadout {
            index,
            value: self.values[index],
            line_x_percent: x / svg_width * 100.0,
        });
        self.hide_at = Some(now + self.fade_after);
        self.readout.as_ref()
    }

    /// Advance the clock. Returns `true` when this call hid the readout.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                trace!("HoverOverlay: fade-out deadline reached");
                self.hide();
                true
            }
            _ => false,
        }
    }

    /// Hide the readout and cancel any pending fade-out.
    pub fn hide(&mut self) {
        self.readout = None;
        self.hide_at = None;
    }
}
