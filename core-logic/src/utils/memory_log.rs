use crate::traits::{EventLog, Severity};
use std::cell::RefCell;

/// In-memory [`EventLog`] that records every entry in emission order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<(Severity, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.borrow().clone()
    }

    /// Messages recorded at exactly `severity`.
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Entries a sink with `threshold` would emit.
    pub fn visible_at(&self, threshold: Severity) -> Vec<(Severity, String)> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s >= threshold)
            .cloned()
            .collect()
    }
}

impl EventLog for MemoryLog {
    fn log(&self, severity: Severity, message: &str) {
        self.entries
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}
