//! Trend CLI
//!
//! Renders sparklines from the command line:
//! - `trend render` writes a standalone SVG document
//! - `trend path` prints just the path data
//! - `trend init` writes a default `trend.toml`

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Sparkline renderer
#[derive(Parser, Debug)]
#[command(name = "trend")]
#[command(about = "Render sparkline trend lines as SVG")]
#[command(version)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a dataset as an SVG document
    Render(RenderArgs),

    /// Print the compiled path of a dataset
    Path(PathArgs),

    /// Write a default trend.toml
    Init {
        /// Where to write the config
        #[arg(default_value = config::CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Dataset and chart options shared by `render` and `path`.
#[derive(Args, Debug, Default)]
pub struct ChartArgs {
    /// JSON array of numbers or `{"value": n}` records. `-` reads stdin.
    pub input: Option<PathBuf>,

    /// Inline values instead of an input file
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<f32>,

    /// Config file (defaults to ./trend.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Round the corners of the line
    #[arg(long)]
    pub smooth: bool,

    #[arg(long)]
    pub radius: Option<f32>,

    #[arg(long)]
    pub padding: Option<f32>,

    #[arg(long)]
    pub width: Option<f32>,

    #[arg(long)]
    pub height: Option<f32>,

    #[arg(long)]
    pub stroke: Option<String>,

    /// Gradient colours, top to bottom
    #[arg(long, value_delimiter = ',')]
    pub gradient: Vec<String>,

    /// Fixed chart id, for reproducible element ids
    #[arg(long)]
    pub id: Option<u64>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Animate the stroke on first paint
    #[arg(long)]
    pub auto_draw: bool,

    /// Render one still frame this many milliseconds into the auto-draw
    /// reveal, with the dash written inline instead of as CSS
    #[arg(long, value_name = "MS")]
    pub frame: Option<f32>,

    /// Highlight a range of indices, e.g. `2,5`
    #[arg(long, value_delimiter = ',')]
    pub highlight: Option<Vec<usize>>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Print path commands and length as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match cli.command {
        Command::Render(args) => commands::render(&args),
        Command::Path(args) => commands::path(&args),
        Command::Init { path, force } => {
            config::write_default(&path, force)?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}
