//! Quarter-step logging loop.
//!
//! Divides each counter in `1..=19` by four and logs the quotient at debug.
//! The post-loop check against [`COMPLETION_MARK`] can never succeed for this
//! range, so `Completed` is never printed. That branch is kept as written.

use crate::traits::{EventLog, Severity};
use std::io::{self, Write};

pub const FIRST_COUNTER: u32 = 1;
pub const LAST_COUNTER: u32 = 19;
pub const DIVISOR: f64 = 4.0;
pub const COMPLETION_MARK: f64 = 20.0;

/// Which program is running the loop; decides the program markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopVariant {
    /// Logs to a file; program end is a debug entry, no start marker.
    FileBacked,
    /// Logs to stderr; program start and end are info entries.
    Console,
}

impl LoopVariant {
    pub fn start_marker(self) -> Option<Severity> {
        match self {
            LoopVariant::FileBacked => None,
            LoopVariant::Console => Some(Severity::Info),
        }
    }

    pub fn end_marker(self) -> Severity {
        match self {
            LoopVariant::FileBacked => Severity::Debug,
            LoopVariant::Console => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopOutcome {
    pub quotients: Vec<f64>,
    pub last: f64,
    pub completed: bool,
}

/// Render a quotient the way the log shows it: `1.0`, `0.25`, `4.75`.
pub fn format_quotient(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Run the loop, logging through `log` and printing to `out`.
pub fn run_quarter_loop<W: Write>(
    variant: LoopVariant,
    log: &dyn EventLog,
    out: &mut W,
) -> io::Result<LoopOutcome> {
    if let Some(severity) = variant.start_marker() {
        log.log(severity, "Beginning program");
    }

    log.debug("Beginning Loop");
    let mut quotients = Vec::with_capacity((LAST_COUNTER - FIRST_COUNTER + 1) as usize);
    // overwritten on every pass; the range is never empty
    let mut last = 0.0;
    for counter in FIRST_COUNTER..=LAST_COUNTER {
        last = f64::from(counter) / DIVISOR;
        log.debug(&format_quotient(last));
        quotients.push(last);
    }
    log.debug("End Loop");

    #[allow(clippy::float_cmp)]
    let completed = last == COMPLETION_MARK;
    if completed {
        writeln!(out, "Completed")?;
        log.debug("Completed");
    }

    log.log(variant.end_marker(), "End program");

    Ok(LoopOutcome {
        quotients,
        last,
        completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryLog;

    #[test]
    fn test_format_quotient() {
        assert_eq!(format_quotient(0.25), "0.25");
        assert_eq!(format_quotient(1.0), "1.0");
        assert_eq!(format_quotient(4.75), "4.75");
        assert_eq!(format_quotient(2.0), "2.0");
    }

    #[test]
    fn test_last_value_never_reaches_completion_mark() {
        let log = MemoryLog::new();
        let mut out = Vec::new();

        let outcome = run_quarter_loop(LoopVariant::FileBacked, &log, &mut out).unwrap();

        assert_eq!(outcome.last, 4.75);
        assert!(!outcome.completed);
        assert!(out.is_empty());
        assert!(!log.entries().iter().any(|(_, m)| m == "Completed"));
    }

    #[test]
    fn test_nineteen_quotients_in_order() {
        let log = MemoryLog::new();
        let outcome = run_quarter_loop(LoopVariant::Console, &log, &mut io::sink()).unwrap();

        let expected: Vec<f64> = (1..=19).map(|i| f64::from(i) / 4.0).collect();
        assert_eq!(outcome.quotients, expected);
    }

    #[test]
    fn test_file_backed_entries() {
        let log = MemoryLog::new();
        run_quarter_loop(LoopVariant::FileBacked, &log, &mut io::sink()).unwrap();

        let entries = log.entries();
        assert_eq!(entries.len(), 22);
        assert!(entries.iter().all(|(s, _)| *s == Severity::Debug));
        assert_eq!(entries[0].1, "Beginning Loop");
        assert_eq!(entries[1].1, "0.25");
        assert_eq!(entries[4].1, "1.0");
        assert_eq!(entries[19].1, "4.75");
        assert_eq!(entries[20].1, "End Loop");
        assert_eq!(entries[21].1, "End program");
    }

    #[test]
    fn test_console_markers_survive_info_threshold() {
        let log = MemoryLog::new();
        run_quarter_loop(LoopVariant::Console, &log, &mut io::sink()).unwrap();

        assert_eq!(
            log.visible_at(Severity::Info),
            vec![
                (Severity::Info, "Beginning program".to_string()),
                (Severity::Info, "End program".to_string()),
            ]
        );
        assert_eq!(log.messages_at(Severity::Debug).len(), 21);
    }
}
