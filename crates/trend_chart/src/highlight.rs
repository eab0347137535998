use trend_core::Point;

use crate::ChartError;

/// Band behind the highlighted range, spanning the full view box height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightRect {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

/// Band covering data indices `start..=end`.
///
/// The band reaches half a point gap past each end so the first and last
/// highlighted points sit inside it rather than on its edges. Reversed
/// ranges are swapped.
pub fn range_highlight(
    points: &[Point],
    start: usize,
    end: usize,
    view_box_height: f32,
) -> Result<HighlightRect, ChartError> {
    let (start, end) = if end < start { (end, start) } else { (start, end) };
    if points.len() < 2 || end >= points.len() {
        return Err(ChartError::RangeOutOfBounds {
            start,
            end,
            len: points.len(),
        });
    }

    let gap = points[1].x - points[0].x;
    let left = points[start].x - gap / 2.0;
    let right = points[end].x + gap / 2.0;

    Ok(HighlightRect {
        x: left,
        width: right - left,
        height: view_box_height,
    })
}
