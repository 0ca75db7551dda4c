use anyhow::{Context, Result};
use clap::Parser;
use drills_core::config::{self, SumConfig};
use drills_core::drills::{sum_file, write_total};
use drills_core::{setup_logger, DrillError, Severity, TracingLog};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sum the integers in a file, one per line", long_about = None)]
struct Args {
    /// Path to an optional TOML config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input file (default: list_of_numbers)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Minimum severity written to the log
    #[arg(short, long, value_enum)]
    level: Option<Severity>,

    /// Prefix records with a local timestamp
    #[arg(long)]
    timestamps: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config: SumConfig =
        config::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    if let Some(input) = args.input {
        config.input = input;
    }
    config.log.apply_overrides(args.level, args.timestamps);

    let _guard = setup_logger(&config.log)?;

    let report = sum_file(&config.input, &TracingLog)?;

    let stdout = io::stdout();
    write_total(&mut stdout.lock(), &report.total).map_err(DrillError::Output)?;

    Ok(())
}
