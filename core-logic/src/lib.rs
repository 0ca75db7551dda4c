//! # Drills Core - Logging and Parsing Drills
//!
//! Shared library behind three small programs: two quarter-step logging loops
//! (file sink and console sink) and an integer summation over a text file.
//!
//! ## Modules
//!
//! - [`config`] - Serde config structs with built-in defaults
//! - [`drills`] - The loop and summation logic
//! - [`error`] - Typed error handling with thiserror
//! - [`traits`] - `EventLog` capability and `Severity`
//! - [`utils`] - Logger setup and an in-memory log for tests

pub mod config;
pub mod drills;
pub mod error;
pub mod traits;
pub(crate) mod utils;

pub use config::{ConsoleLoopConfig, FileLoopConfig, LogConfig, SinkTarget, SumConfig};
pub use drills::{LoopOutcome, LoopVariant, SumReport};
pub use error::{ConfigError, DrillError};
pub use traits::{EventLog, Severity};

pub use utils::{
    basic_layer, open_log_file, setup_logger, BasicFormatter, MemoryLog, TracingLog, LOGGER_NAME,
};
