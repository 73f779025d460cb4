//! Command-line interface wiring for the `punchpattern` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use punchpattern::{CardConfig, CardDrawing, PatternSource, SvgWriter};

pub mod common;
pub mod utils;

use common::StitchFormatArg;

/// Parsed CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "punchpattern",
    version,
    about = "Generate an SVG cutting drawing for a machine punch card"
)]
pub struct Cli {
    /// Pattern file, one row per line, `x`/`X` marks a hole (default: built-in 48x24 pattern)
    pub pattern: Option<PathBuf>,

    /// Output SVG path (default: `<pattern>.svg` or `punchcard.svg`)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// JSON file overriding any card layout fields
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Card format preset controlling the stitch width
    #[arg(long, value_enum)]
    pub stitches: Option<StitchFormatArg>,

    /// Number of fully punched leader/trailer rows
    #[arg(long = "blank-rows")]
    pub blank_rows: Option<usize>,

    /// Print the effective layout as JSON and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn card_config(&self) -> Result<CardConfig> {
        let mut config = match &self.config {
            Some(path) => CardConfig::load(path)?,
            None => CardConfig::default(),
        };
        if let Some(format) = self.stitches {
            config.stitch_width = format.stitch_width();
        }
        if let Some(rows) = self.blank_rows {
            config.blank_rows = rows;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Execute a parsed invocation.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.card_config()?;
    if cli.print_config {
        let json = serde_json::to_string_pretty(&config).context("failed to encode config")?;
        println!("{}", json);
        return Ok(());
    }

    let source = PatternSource::from_arg(cli.pattern.clone());
    let output = utils::resolve_output(&source, cli.output.as_deref());
    let grid = source.load()?;

    let drawing = CardDrawing::build(&grid, &config);
    SvgWriter::new(&config).save(&drawing, &output)?;

    println!(
        "Saved {} ({} mm x {} mm, {})",
        output.display(),
        drawing.dimensions.width,
        drawing.dimensions.height,
        drawing.counts()
    );
    Ok(())
}
