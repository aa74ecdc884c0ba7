use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Entries kept before the oldest are dropped.
pub const MAX_LOG_ENTRIES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

/// Activity log shown in the optional logs panel.
///
/// Every entry is mirrored to `tracing`, so the log file holds the same
/// history as the panel.
#[derive(Debug)]
pub struct LogsState {
    entries: VecDeque<LogEntry>,
    pub is_visible: bool,
}

impl Default for LogsState {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(64),
            is_visible: false,
        }
    }
}

impl LogsState {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Warn, message.into());
    }

    fn push(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Info => tracing::info!(target: "docubuilder::activity", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "docubuilder::activity", "{message}"),
        }
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            level,
            message,
        });
    }

    pub fn toggle_visible(&mut self) {
        self.is_visible = !self.is_visible;
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_entries_past_capacity() {
        let mut logs = LogsState::default();
        for index in 0..MAX_LOG_ENTRIES + 3 {
            logs.info(format!("entry {index}"));
        }
        assert_eq!(logs.entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs.entries().front().map(|entry| entry.message.as_str()), Some("entry 3"));
    }

    #[test]
    fn toggles_visibility() {
        let mut logs = LogsState::default();
        assert!(!logs.is_visible);
        logs.toggle_visible();
        assert!(logs.is_visible);
    }
}
