use anyhow::{Context, Result};
use clap::Parser;
use drills_core::config::{self, FileLoopConfig};
use drills_core::drills::run_quarter_loop;
use drills_core::{setup_logger, DrillError, LoopVariant, Severity, SinkTarget, TracingLog};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Quarter-step loop logged to a file", long_about = None)]
struct Args {
    /// Path to an optional TOML config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file to append to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Minimum severity written to the log
    #[arg(short, long, value_enum)]
    level: Option<Severity>,

    /// Prefix records with a local timestamp
    #[arg(long)]
    timestamps: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config: FileLoopConfig =
        config::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    if let Some(path) = args.log_file {
        config.log.sink = SinkTarget::File { path };
    }
    config.log.apply_overrides(args.level, args.timestamps);

    // Keep the guard alive until exit so the file sink is flushed
    let _guard = setup_logger(&config.log)?;

    let stdout = io::stdout();
    run_quarter_loop(LoopVariant::FileBacked, &TracingLog, &mut stdout.lock())
        .map_err(DrillError::Output)?;

    Ok(())
}
