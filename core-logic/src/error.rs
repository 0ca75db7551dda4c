//! # Core Error Types
//!
//! Centralized error definitions for the drills crate.
//! Per-line parse failures are not errors; they are logged and skipped by
//! [`crate::drills::integer_sum`]. Everything here is fatal to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for drill operations.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open input file '{}'", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input file '{}'", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write program output")]
    Output(#[source] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error reading {path}: {msg}")]
    IoError { path: String, msg: String },

    #[error("Parse error in {path}: {msg}")]
    ParseError { path: String, msg: String },
}
