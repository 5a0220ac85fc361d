//! Log records passed from a channel to its processors and handlers

use crate::Severity;
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single log entry
///
/// Processors receive a record by value and return it (possibly with new
/// `extra` entries); handlers receive the finished record by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Message payload, any JSON-representable value
    pub message: Value,

    /// Channel severity
    pub severity: Severity,

    /// Name of the channel that produced the record
    pub channel: String,

    /// Time the record was created
    pub datetime: DateTime<Local>,

    /// Caller-supplied context
    pub context: Map<String, Value>,

    /// Data added by processors
    pub extra: Map<String, Value>,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn new(channel: impl Into<String>, severity: Severity, message: impl Into<Value>) -> Self {
        Self {
            message: message.into(),
            severity,
            channel: channel.into(),
            datetime: Local::now(),
            context: Map::new(),
            extra: Map::new(),
        }
    }

    /// Add a context entry
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Add an extra entry
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Render the message as text
    ///
    /// Strings are used as-is, `null` renders empty, anything else is JSON.
    pub fn message_text(&self) -> String {
        match &self.message {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
