//! Console Logger
//!
//! `log` backend for the browser. Records go to `console.*` on wasm32
//! (stderr elsewhere) and the most recent ones are kept in a circular
//! buffer so the UI can inspect them after the fact.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Fixed-capacity record buffer, oldest dropped first
#[derive(Debug)]
pub struct History {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl History {
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Snapshot, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct ConsoleLogger {
    history: Mutex<History>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    history: Mutex::new(History::new(DEFAULT_CAPACITY)),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        emit(record.level(), record.target(), &message);

        if let Ok(mut history) = self.history.lock() {
            history.push(LogEntry {
                level: record.level(),
                target: record.target().to_string(),
                message,
            });
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, target: &str, message: &str) {
    use wasm_bindgen::JsValue;

    let line = JsValue::from_str(&format!("[{}] {}", target, message));
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, target: &str, message: &str) {
    eprintln!("{:<5} [{}] {}", level, target, message);
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Records captured by the global logger, oldest first
pub fn history() -> Vec<LogEntry> {
    LOGGER
        .history
        .lock()
        .map(|h| h.entries())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> LogEntry {
        LogEntry {
            level: Level::Info,
            target: "test".to_string(),
            message: format!("message {}", n),
        }
    }

    #[test]
    fn test_history_drops_oldest_when_full() {
        let mut history = History::new(3);
        for n in 0..5 {
            history.push(entry(n));
        }

        let entries = history.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "message 2");
        assert_eq!(entries[2].message, "message 4");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = History::new(0);
        history.push(entry(1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_global_logger_captures_records() {
        // Another test binary may have installed a logger already; ignore that.
        let _ = init(LevelFilter::Debug);
        log::warn!(target: "portal", "course fetch failed");

        let captured = history();
        assert!(captured
            .iter()
            .any(|e| e.target == "portal" && e.message == "course fetch failed" && e.level == Level::Warn));
    }
}
