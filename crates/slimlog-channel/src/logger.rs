//! Named channel logger

use crate::{Handler, Processor};
use serde_json::{Map, Value};
use slimlog_core::{ChannelResult, Record, Severity};
use std::sync::Arc;

/// A named log channel
///
/// Handlers and processors are kept in registration order. A record first
/// passes through every processor, then reaches each handler that accepts
/// its severity until one of them stops bubbling.
pub struct Logger {
    name: String,
    handlers: Vec<Arc<dyn Handler>>,
    processors: Vec<Arc<dyn Processor>>,
}

impl Logger {
    /// Create a channel with no handlers or processors
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
            processors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a handler after the existing ones
    pub fn push_handler(&mut self, handler: Arc<dyn Handler>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Register a processor after the existing ones
    pub fn push_processor(&mut self, processor: Arc<dyn Processor>) -> &mut Self {
        self.processors.push(processor);
        self
    }

    pub fn handlers(&self) -> &[Arc<dyn Handler>] {
        &self.handlers
    }

    pub fn processors(&self) -> &[Arc<dyn Processor>] {
        &self.processors
    }

    /// Whether any handler accepts the severity
    pub fn is_handling(&self, severity: Severity) -> bool {
        self.handlers.iter().any(|h| h.is_handling(severity))
    }

    /// Add a record to the channel
    ///
    /// Returns `Ok(false)` when no handler accepts the severity. The first
    /// handler error ends dispatch and is returned as-is.
    pub fn add_record(&self, severity: Severity, message: impl Into<Value>) -> ChannelResult<bool> {
        self.add_record_with_context(severity, message, Map::new())
    }

    /// Add a record carrying caller context
    pub fn add_record_with_context(
        &self,
        severity: Severity,
        message: impl Into<Value>,
        context: Map<String, Value>,
    ) -> ChannelResult<bool> {
        if !self.is_handling(severity) {
            return Ok(false);
        }

        let mut record = Record::new(self.name.as_str(), severity, message);
        record.context = context;

        for processor in &self.processors {
            record = processor.process(record);
        }

        for handler in &self.handlers {
            if !handler.is_handling(severity) {
                continue;
            }
            if handler.handle(&record)? {
                break;
            }
        }

        Ok(true)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .field("processors", &self.processors.len())
            .finish()
    }
}
