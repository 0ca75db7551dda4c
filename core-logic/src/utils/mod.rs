//! # Utilities Module
//!
//! Logging plumbing shared by the drill binaries.

pub(crate) mod logger;
pub(crate) mod memory_log;

pub use logger::{basic_layer, open_log_file, setup_logger, BasicFormatter, TracingLog, LOGGER_NAME};
pub use memory_log::MemoryLog;
