//! Operator event log.
//!
//! Chronological, stamped against simulation time. Each snapshot carries the
//! entries written since the previous one; the full history is kept for export.

use tracing::info;

use fcs_core::enums::LogLevel;
use fcs_core::events::LogEntry;
use fcs_core::types::SimTime;

#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
    published: usize,
}

impl EventLog {
    pub fn push(&mut self, time: &SimTime, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry {
            level,
            tick: time.tick,
            time_secs: time.elapsed_secs,
            message: message.into(),
        };
        info!(tick = entry.tick, "{}", entry.message);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries written since the last call.
    pub fn take_new(&mut self) -> Vec<LogEntry> {
        let fresh = self.entries[self.published..].to_vec();
        self.published = self.entries.len();
        fresh
    }

    /// Whole log as text, one rendered line per entry.
    pub fn export(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_new_returns_each_entry_once() {
        let mut log = EventLog::default();
        let time = SimTime::default();
        log.push(&time, LogLevel::Info, "one");
        log.push(&time, LogLevel::Info, "two");
        assert_eq!(log.take_new().len(), 2);
        assert!(log.take_new().is_empty());

        log.push(&time, LogLevel::Error, "three");
        let fresh = log.take_new();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].message, "three");
        assert_eq!(log.entries().len(), 3);
    }

    #[test]
    fn export_renders_clock_prefix() {
        let mut log = EventLog::default();
        log.push(
            &SimTime {
                tick: 0,
                elapsed_secs: 0.0,
            },
            LogLevel::Info,
            "System online",
        );
        log.push(
            &SimTime {
                tick: 3720,
                elapsed_secs: 62.0,
            },
            LogLevel::Info,
            "Target TGT-001 LOCKED",
        );
        assert_eq!(
            log.export(),
            "[00:00:00] System online\n[00:01:02] Target TGT-001 LOCKED"
        );
    }
}
