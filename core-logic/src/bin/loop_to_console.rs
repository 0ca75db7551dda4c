use anyhow::{Context, Result};
use clap::Parser;
use drills_core::config::{self, ConsoleLoopConfig};
use drills_core::drills::run_quarter_loop;
use drills_core::{setup_logger, DrillError, LoopVariant, Severity, TracingLog};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Quarter-step loop logged to stderr", long_about = None)]
struct Args {
    /// Path to an optional TOML config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum severity written to stderr
    #[arg(short, long, value_enum)]
    level: Option<Severity>,

    /// Prefix records with a local timestamp
    #[arg(long)]
    timestamps: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config: ConsoleLoopConfig =
        config::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    config.log.apply_overrides(args.level, args.timestamps);

    let _guard = setup_logger(&config.log)?;

    let stdout = io::stdout();
    run_quarter_loop(LoopVariant::Console, &TracingLog, &mut stdout.lock())
        .map_err(DrillError::Output)?;

    Ok(())
}
