//! Configuration for the drill programs.
//!
//! Config files are sparse: every key is optional and anything left out keeps
//! the program's built-in value, so an empty TOML file (or no file at all)
//! reproduces the stock programs.

use crate::error::ConfigError;
use crate::traits::Severity;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "example.log";
pub const DEFAULT_INPUT_FILE: &str = "list_of_numbers";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkTarget {
    File { path: PathBuf },
    Stderr,
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub sink: SinkTarget,
    pub threshold: Severity,
    /// Prefix each record with a local timestamp.
    pub timestamps: bool,
}

impl LogConfig {
    pub fn file(path: impl Into<PathBuf>, threshold: Severity) -> Self {
        Self {
            sink: SinkTarget::File { path: path.into() },
            threshold,
            timestamps: false,
        }
    }

    pub fn stderr(threshold: Severity) -> Self {
        Self {
            sink: SinkTarget::Stderr,
            threshold,
            timestamps: false,
        }
    }

    /// Apply command-line overrides on top of file or default values.
    pub fn apply_overrides(&mut self, threshold: Option<Severity>, timestamps: bool) {
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }
        if timestamps {
            self.timestamps = true;
        }
    }
}

/// The `[log]` table as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub sink: Option<SinkTarget>,
    pub threshold: Option<Severity>,
    pub timestamps: Option<bool>,
}

impl LogSection {
    /// Fill the keys this section sets into `base`.
    pub fn merge_onto(self, mut base: LogConfig) -> LogConfig {
        if let Some(sink) = self.sink {
            base.sink = sink;
        }
        if let Some(threshold) = self.threshold {
            base.threshold = threshold;
        }
        if let Some(timestamps) = self.timestamps {
            base.timestamps = timestamps;
        }
        base
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LoopFile {
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SumFile {
    input: Option<PathBuf>,
    log: LogSection,
}

/// Config for `loop-to-file`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "LoopFile")]
pub struct FileLoopConfig {
    pub log: LogConfig,
}

impl Default for FileLoopConfig {
    fn default() -> Self {
        LoopFile::default().into()
    }
}

impl From<LoopFile> for FileLoopConfig {
    fn from(raw: LoopFile) -> Self {
        Self {
            log: raw.log.merge_onto(default_file_log()),
        }
    }
}

/// Config for `loop-to-console`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "LoopFile")]
pub struct ConsoleLoopConfig {
    pub log: LogConfig,
}

impl Default for ConsoleLoopConfig {
    fn default() -> Self {
        LoopFile::default().into()
    }
}

impl From<LoopFile> for ConsoleLoopConfig {
    fn from(raw: LoopFile) -> Self {
        Self {
            log: raw.log.merge_onto(default_console_log()),
        }
    }
}

/// Config for `sum-of-numbers`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "SumFile")]
pub struct SumConfig {
    pub input: PathBuf,
    pub log: LogConfig,
}

impl Default for SumConfig {
    fn default() -> Self {
        SumFile::default().into()
    }
}

impl From<SumFile> for SumConfig {
    fn from(raw: SumFile) -> Self {
        Self {
            input: raw.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE)),
            log: raw.log.merge_onto(default_console_log()),
        }
    }
}

fn default_file_log() -> LogConfig {
    LogConfig::file(DEFAULT_LOG_FILE, Severity::Debug)
}

fn default_console_log() -> LogConfig {
    LogConfig::stderr(Severity::Info)
}

/// Load a TOML config file.
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
            path: display.clone(),
        },
        _ => ConfigError::IoError {
            path: display.clone(),
            msg: e.to_string(),
        },
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: display,
        msg: e.to_string(),
    })
}

/// Load `path` when given, otherwise fall back to the defaults.
pub fn load_or_default<T: DeserializeOwned + Default>(
    path: Option<&Path>,
) -> Result<T, ConfigError> {
    match path {
        Some(path) => load_toml(path),
        None => Ok(T::default()),
    }
}
