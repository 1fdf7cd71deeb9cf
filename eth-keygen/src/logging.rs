//! Logging capability handed to the key generation pipeline
//!
//! The library never logs through a process-wide object of its own. Callers
//! pass a [`Logger`]; the binary uses [`TracingLogger`], tests use
//! [`RecordingLogger`] to assert on what was reported.

use std::cell::RefCell;

/// Severity of a logged event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
    Fatal,
}

/// Sink for pipeline events
pub trait Logger {
    fn info(&self, message: &str);

    /// Report a failure the run recovers from
    fn error(&self, message: &str);

    /// Report a failure that ends the run. The caller is responsible for
    /// propagating the error; this only records it.
    fn fatal(&self, message: &str);
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn fatal(&self, message: &str) {
        tracing::error!(fatal = true, "{}", message);
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingLogger {
    events: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, oldest first
    pub fn events(&self) -> Vec<(LogLevel, String)> {
        self.events.borrow().clone()
    }

    /// Messages recorded at the given level
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn record(&self, level: LogLevel, message: &str) {
        self.events.borrow_mut().push((level, message.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.record(LogLevel::Fatal, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_logger_keeps_order_and_levels() {
        let logger = RecordingLogger::new();
        logger.info("one");
        logger.error("two");
        logger.fatal("three");

        assert_eq!(
            logger.events(),
            vec![
                (LogLevel::Info, "one".to_string()),
                (LogLevel::Error, "two".to_string()),
                (LogLevel::Fatal, "three".to_string()),
            ]
        );
        assert_eq!(logger.messages(LogLevel::Error), vec!["two".to_string()]);
    }
}
