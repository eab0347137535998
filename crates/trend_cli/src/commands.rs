//! Subcommand implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, warn};
use trend_chart::{plain_values, render_svg, render_svg_frame, DataPoint, Trend};
use trend_core::{path_length, PathCommand};

use crate::config;
use crate::{ChartArgs, PathArgs, RenderArgs};

/// `trend path --json` output
#[derive(Debug, Serialize)]
struct PathReport<'a> {
    d: String,
    length: f32,
    commands: &'a [PathCommand],
}

pub fn render(args: &RenderArgs) -> Result<()> {
    let mut trend = build_trend(&args.chart)?;
    if args.auto_draw || args.frame.is_some() {
        trend = trend.auto_draw(true);
    }
    if let Some(range) = &args.highlight {
        match range.as_slice() {
            &[start, end] => trend = trend.range_highlight(start, end),
            _ => anyhow::bail!("--highlight takes exactly two indices, e.g. `2,5`"),
        }
    }

    let svg = match args.frame {
        Some(elapsed_ms) => render_svg_frame(&trend, elapsed_ms)?,
        None => render_svg(&trend)?,
    };
    let Some(svg) = svg else {
        warn!(len = trend.values().len(), "not enough data to draw a line");
        return Ok(());
    };

    match &args.output {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), "wrote svg");
        }
        None => io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}

pub fn path(args: &PathArgs) -> Result<()> {
    let trend = build_trend(&args.chart)?;
    let Some(layout) = trend.layout()? else {
        warn!(len = trend.values().len(), "not enough data to draw a line");
        return Ok(());
    };

    let out = if args.json {
        let report = PathReport {
            d: layout.path.to_svg_d(),
            length: path_length(&layout.path),
            commands: layout.path.commands(),
        };
        serde_json::to_string_pretty(&report)?
    } else {
        layout.path.to_svg_d()
    };
    println!("{out}");
    Ok(())
}

/// Dataset plus config file plus command-line overrides.
fn build_trend(args: &ChartArgs) -> Result<Trend> {
    let mut options = config::load_options(args.config.as_deref())?;
    let chart = &mut options.chart;

    if args.smooth {
        chart.smooth = true;
    }
    if let Some(radius) = args.radius {
        chart.radius = radius;
    }
    if let Some(padding) = args.padding {
        chart.padding = padding;
    }
    if args.width.is_some() {
        chart.width = args.width;
    }
    if args.height.is_some() {
        chart.height = args.height;
    }
    if let Some(stroke) = &args.stroke {
        chart.stroke = stroke.clone();
    }
    if !args.gradient.is_empty() {
        chart.gradient = args.gradient.clone();
    }

    let trend = Trend::with_options(load_values(args)?, options);
    Ok(match args.id {
        Some(id) => trend.with_id(id),
        None => trend,
    })
}

fn load_values(args: &ChartArgs) -> Result<Vec<f32>> {
    if !args.values.is_empty() {
        return Ok(args.values.clone());
    }
    let Some(input) = &args.input else {
        anyhow::bail!("No data given. Pass an input file, `-` for stdin, or --values.");
    };

    let content = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };
    parse_values(&content).with_context(|| format!("Failed to parse {}", input.display()))
}

fn parse_values(content: &str) -> Result<Vec<f32>> {
    let data: Vec<DataPoint> = serde_json::from_str(content)?;
    Ok(plain_values(&data))
}
