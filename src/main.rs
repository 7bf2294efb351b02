// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use handing::handing::colored_notes;
use handing::{chart, HandingConfig, HandingParser, Map};

/// Assign hands to every note of a tile-grid chart and color them
#[derive(Parser, Debug)]
#[command(name = "handing")]
#[command(version)]
struct Cli {
    /// Chart file (JSON note rows)
    chart: Option<PathBuf>,

    /// Where to write the colored chart (defaults to new_<chart name>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Handing configuration (.yaml, .yml or .toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the rest (ms) that starts a new segment
    #[arg(long)]
    threshold: Option<i64>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn default_output(input: &std::path::Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "beats.json".to_string());
    input.with_file_name(format!("new_{}", name))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => HandingConfig::load(path)?,
        None => HandingConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config.default_threshold = threshold;
        config.validate()?;
    }

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let input = cli
        .chart
        .context("No chart file given (run with --help for usage)")?;
    let notes = chart::load_chart(&input)?;
    info!(notes = notes.len(), path = ?input, "chart loaded");

    let map = Map::from_notes(notes).context("Chart notes could not be grouped into chords")?;
    let parsed = HandingParser::new(config)
        .parse(&map)
        .context("Handing failed")?;
    let stats = parsed.stats;

    let output = cli.output.unwrap_or_else(|| default_output(&input));
    chart::save_chart(&output, &colored_notes(parsed.map))?;

    println!("{}", stats);
    println!("Wrote colored chart to {}", output.display());
    Ok(())
}
