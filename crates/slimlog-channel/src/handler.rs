//! Handler trait and in-process handlers

use parking_lot::Mutex;
use slimlog_core::{ChannelResult, Record, Severity};

/// Receives finished records and persists or ships them
pub trait Handler: Send + Sync {
    /// Whether this handler accepts records of the given severity
    fn is_handling(&self, _severity: Severity) -> bool {
        true
    }

    /// Handle a record
    ///
    /// Returns `Ok(true)` to stop the record reaching handlers registered
    /// after this one.
    fn handle(&self, record: &Record) -> ChannelResult<bool>;
}

/// Handler that accepts records at or above a severity and drops them
pub struct NullHandler {
    level: Severity,
}

impl NullHandler {
    /// Swallow every record
    pub fn new() -> Self {
        Self::with_level(Severity::Debug)
    }

    /// Swallow records at or above `level`
    pub fn with_level(level: Severity) -> Self {
        Self { level }
    }
}

impl Default for NullHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for NullHandler {
    fn is_handling(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    fn handle(&self, _record: &Record) -> ChannelResult<bool> {
        Ok(true)
    }
}

/// Handler that keeps records in memory
pub struct TestHandler {
    level: Severity,
    bubble: bool,
    records: Mutex<Vec<Record>>,
}

impl TestHandler {
    pub fn new() -> Self {
        Self {
            level: Severity::Debug,
            bubble: true,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Only capture records at or above `level`
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Whether records continue to later handlers
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    /// Snapshot of captured records
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Whether a record with this severity and message text was captured
    pub fn has_record(&self, severity: Severity, text: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|r| r.severity == severity && r.message_text() == text)
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for TestHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for TestHandler {
    fn is_handling(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    fn handle(&self, record: &Record) -> ChannelResult<bool> {
        self.records.lock().push(record.clone());
        Ok(!self.bubble)
    }
}
