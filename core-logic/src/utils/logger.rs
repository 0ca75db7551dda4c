use crate::config::{LogConfig, SinkTarget};
use crate::traits::{EventLog, Severity};
use anyhow::{Context, Result};
use chrono::Local;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields, MakeWriter},
    prelude::*,
    registry::LookupSpan,
    Layer,
};

/// Target every drill event is emitted under; rendered as the logger name.
pub const LOGGER_NAME: &str = "root";

/// Install the process-wide subscriber described by `config`.
///
/// For a file sink the returned guard MUST be kept alive by the caller;
/// dropping it flushes pending records.
pub fn setup_logger(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    match &config.sink {
        SinkTarget::File { path } => {
            let file = open_log_file(path)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);

            let subscriber = tracing_subscriber::registry().with(basic_layer(non_blocking, config));
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to set global subscriber")?;

            Ok(Some(guard))
        }
        SinkTarget::Stderr => {
            let subscriber =
                tracing_subscriber::registry().with(basic_layer(std::io::stderr, config));
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to set global subscriber")?;

            Ok(None)
        }
    }
}

/// Open a log file for appending, creating it if missing.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Plain-text fmt layer filtered at the configured threshold.
pub fn basic_layer<S, W>(writer: W, config: &LogConfig) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let threshold: Level = config.threshold.into();

    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .event_format(BasicFormatter {
            timestamps: config.timestamps,
        })
        .with_filter(LevelFilter::from_level(threshold))
}

/// [`EventLog`] backed by `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl EventLog for TracingLog {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: LOGGER_NAME, "{}", message),
            Severity::Info => tracing::info!(target: LOGGER_NAME, "{}", message),
            Severity::Warning => tracing::warn!(target: LOGGER_NAME, "{}", message),
        }
    }
}

// --- Formatters ---

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

fn level_name(level: &Level) -> &'static str {
    if *level == Level::WARN {
        "WARNING"
    } else {
        level.as_str()
    }
}

/// Renders `LEVEL:target:message`, optionally prefixed with a timestamp.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicFormatter {
    pub timestamps: bool,
}

impl<S, N> FormatEvent<S, N> for BasicFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if self.timestamps {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            write!(writer, "{} ", timestamp)?;
        }

        let metadata = event.metadata();
        let mut msg_visitor = MessageVisitor::default();
        event.record(&mut msg_visitor);

        writeln!(
            writer,
            "{}:{}:{}",
            level_name(metadata.level()),
            metadata.target(),
            msg_visitor.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(config: &LogConfig, body: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber =
            tracing_subscriber::registry().with(basic_layer(move || writer.clone(), config));
        tracing::subscriber::with_default(subscriber, body);
        buf.contents()
    }

    #[test]
    fn test_records_use_level_and_logger_name() {
        let output = capture(&LogConfig::stderr(Severity::Debug), || {
            TracingLog.debug("0.25");
            TracingLog.info("Beginning program");
            TracingLog.warning("Received non-integer input");
        });

        assert_eq!(
            output,
            "DEBUG:root:0.25\nINFO:root:Beginning program\nWARNING:root:Received non-integer input\n"
        );
    }

    #[test]
    fn test_threshold_drops_lower_severities() {
        let output = capture(&LogConfig::stderr(Severity::Info), || {
            TracingLog.debug("Beginning Loop");
            TracingLog.info("End program");
        });

        assert_eq!(output, "INFO:root:End program\n");
    }

    #[test]
    fn test_timestamp_prefix() {
        let mut config = LogConfig::stderr(Severity::Info);
        config.timestamps = true;

        let output = capture(&config, || TracingLog.info("End program"));

        // "YYYY-MM-DD HH:MM:SS " is 20 bytes
        assert_eq!(output.len(), 20 + "INFO:root:End program\n".len());
        assert!(output.ends_with(" INFO:root:End program\n"));
        assert_eq!(&output[4..5], "-");
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.log");
        std::fs::write(&path, "DEBUG:root:earlier run\n").unwrap();

        {
            let mut file = open_log_file(&path).unwrap();
            file.write_all(b"DEBUG:root:this run\n").unwrap();
        }

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "DEBUG:root:earlier run\nDEBUG:root:this run\n");
    }

    #[test]
    fn test_open_log_file_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("example.log");

        let err = open_log_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open log file"));
    }
}
