//! SVG document output

use std::fmt::Write as _;

use tracing::debug;

use crate::hover::HoverReadout;
use crate::stylesheet::StyleRegistry;
use crate::trend::{Trend, TrendLayout};
use crate::ChartError;

/// Render `trend` as a standalone SVG document.
///
/// Returns `Ok(None)` when there is not enough data to draw a line.
pub fn render_svg(trend: &Trend) -> Result<Option<String>, ChartError> {
    render_svg_with_hover(trend, None)
}

/// Like [`render_svg`], with the hover readout and marker line filled in.
pub fn render_svg_with_hover(
    trend: &Trend,
    hover: Option<&HoverReadout>,
) -> Result<Option<String>, ChartError> {
    let Some(layout) = trend.layout()? else {
        return Ok(None);
    };

    let css = trend.auto_draw_for(&layout).map(|draw| {
        let css = draw.to_css();
        if StyleRegistry::global().inject(&css) {
            debug!(id = layout.id, "render_svg: registered auto-draw keyframes");
        }
        css
    });

    Ok(Some(write_document(trend, &layout, hover, css.as_deref(), None)))
}

/// Snapshot of the auto-draw reveal `elapsed_ms` into the animation.
///
/// For consumers that rasterize frames instead of running CSS animations:
/// the dash is written straight onto the path and no `<style>` is emitted.
/// Once the reveal is over, or with auto-draw off, the line is drawn whole.
pub fn render_svg_frame(trend: &Trend, elapsed_ms: f32) -> Result<Option<String>, ChartError> {
    let Some(layout) = trend.layout()? else {
        return Ok(None);
    };

    let dash = trend.auto_draw_for(&layout).and_then(|draw| {
        let offset = draw.dash_offset_at(elapsed_ms)?;
        debug!(id = layout.id, elapsed_ms, offset, "render_svg_frame");
        Some((draw.line_length, offset))
    });

    Ok(Some(write_document(trend, &layout, None, None, dash)))
}

fn write_document(
    trend: &Trend,
    layout: &TrendLayout,
    hover: Option<&HoverReadout>,
    css: Option<&str>,
    dash: Option<(f32, f32)>,
) -> String {
    let chart = &trend.options.chart;
    let hover_style = &trend.options.hover;
    let (vb_w, vb_h) = layout.view_box;
    let (svg_w, svg_h) = chart.svg_size();

    let mut out = String::with_capacity(1024);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {vb_w} {vb_h}">"#,
        escape_attr(&svg_w),
        escape_attr(&svg_h),
    );

    if let Some(css) = css {
        let _ = writeln!(out, "  <style data-trend>\n{css}  </style>");
    }

    if !layout.gradient.is_empty() {
        let _ = writeln!(out, "  <defs>");
        let _ = writeln!(
            out,
            r#"    <linearGradient id="{}" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            layout.gradient_id()
        );
        for stop in &layout.gradient {
            let _ = writeln!(
                out,
                r#"      <stop offset="{}" stop-color="{}"/>"#,
                stop.offset,
                escape_attr(&stop.color)
            );
        }
        let _ = writeln!(out, "    </linearGradient>");
        let _ = writeln!(out, "  </defs>");
    }

    if let Some(rect) = layout.highlight {
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="0" width="{}" height="{}" fill="{}" stroke="transparent" stroke-width="0"/>"#,
            rect.x,
            rect.width,
            rect.height,
            escape_attr(&trend.options.highlight.color)
        );
    }

    let stroke = if layout.gradient.is_empty() {
        escape_attr(&chart.stroke)
    } else {
        format!("url(#{})", layout.gradient_id())
    };
    let dash_attrs = dash
        .map(|(len, offset)| {
            format!(r#" stroke-dasharray="{len}" stroke-dashoffset="{offset}""#)
        })
        .unwrap_or_default();
    let _ = writeln!(
        out,
        r#"  <path id="{}" d="{}" fill="none" stroke="{stroke}" stroke-width="{}"{dash_attrs}/>"#,
        layout.path_id(),
        layout.path,
        chart.stroke_width
    );

    let text = hover.map(|h| h.value.to_string()).unwrap_or_default();
    let _ = writeln!(
        out,
        r#"  <text fill="{}" font-size="{}" font-weight="{}" stroke="none" alignment-baseline="hanging">{text}</text>"#,
        escape_attr(&hover_style.text_color),
        hover_style.text_size,
        escape_attr(&hover_style.text_weight),
    );

    let (opacity, line_x) = match hover {
        Some(h) => (1, format!("{}%", h.line_x_percent)),
        None => (0, "0".to_string()),
    };
    let _ = writeln!(
        out,
        r#"  <line opacity="{opacity}" x1="{line_x}" y1="0" x2="{line_x}" y2="100%" stroke="{}" stroke-width="{}"/>"#,
        escape_attr(&hover_style.line_color),
        hover_style.line_width,
    );

    out.push_str("</svg>\n");
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_attribute_text() {
        assert_eq!(escape_attr(r#"a"b<c>&'d"#), "a&quot;b&lt;c&gt;&amp;&#39;d");
        assert_eq!(escape_attr("#aaa"), "#aaa");
    }

    #[test]
    fn short_data_renders_nothing() {
        assert_eq!(render_svg(&Trend::new(vec![1.0])), Ok(None));
    }

    #[test]
    fn plain_line_uses_stroke_colour() {
        let svg = render_svg(&Trend::new(vec![1.0, 2.0, 1.0, 2.0]).with_id(3))
            .unwrap()
            .unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="100%" height="25%" viewBox="0 0 300 75""#));
        assert!(svg.contains(r#"<path id="trend-3" d="M 8,67"#));
        assert!(svg.contains(r#"stroke="black" stroke-width="1""#));
        assert!(!svg.contains("<defs>"));
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("<style"));
        assert!(svg.contains(r#"<line opacity="0""#));
    }

    #[test]
    fn frame_writes_dash_inline_until_reveal_ends() {
        let mut trend = Trend::new(vec![0.0, 10.0])
            .with_id(4)
            .auto_draw(true)
            .size(100.0, 20.0)
            .padding(0.0);
        trend.options.auto_draw.easing = trend_animation::Easing::Linear;
        // One segment from (0, 20) to (100, 0).
        let len = 100f32.hypot(20.0);

        let start = render_svg_frame(&trend, 0.0).unwrap().unwrap();
        assert!(start.contains(&format!(r#"stroke-dasharray="{len}" stroke-dashoffset="{len}""#)));
        assert!(!start.contains("<style"));

        let done = render_svg_frame(&trend, 2000.0).unwrap().unwrap();
        assert!(!done.contains("stroke-dasharray"));

        let still = render_svg_frame(&trend.auto_draw(false), 0.0).unwrap().unwrap();
        assert!(!still.contains("stroke-dasharray"));
    }
}
