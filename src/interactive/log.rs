//! Activity log handed to the workflow.

use std::cell::RefCell;

/// Severity of an activity log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Line-item log of what the workflow did.
pub trait ActivityLog {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

impl<L: ActivityLog + ?Sized> ActivityLog for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Forwards entries to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ActivityLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Keeps entries in memory, for callers that want to inspect them afterwards.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<(Severity, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.borrow().clone()
    }

    /// Whether an entry with this severity contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.entries.borrow().iter().any(|(s, msg)| *s == severity && msg.contains(needle))
    }
}

impl ActivityLog for MemoryLog {
    fn info(&self, message: &str) {
        self.entries.borrow_mut().push((Severity::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.entries.borrow_mut().push((Severity::Error, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_log_records_in_order() {
        let log = MemoryLog::new();
        log.info("first");
        log.error("second");

        assert_eq!(
            log.entries(),
            vec![(Severity::Info, "first".to_string()), (Severity::Error, "second".to_string())]
        );
        assert!(log.contains(Severity::Error, "sec"));
        assert!(!log.contains(Severity::Info, "second"));
    }
}
