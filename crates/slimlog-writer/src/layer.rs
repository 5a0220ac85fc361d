//! Tracing layer that forwards events to a channel writer

use crate::ChannelWriter;
use slimlog_core::LogLevel;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that writes events through a [`ChannelWriter`]
///
/// Events emitted by the slimlog crates themselves are skipped so the
/// writer never logs into itself. Skipped events still reach any other
/// layer in the subscriber.
pub struct WriterLayer {
    writer: Arc<ChannelWriter>,
    level: LogLevel,
}

impl WriterLayer {
    /// Forward every event to `writer`
    pub fn new(writer: Arc<ChannelWriter>) -> Self {
        Self {
            writer,
            level: LogLevel::Debug,
        }
    }

    /// Only forward events at or above `level`
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Convert tracing Level to the framework LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Debug,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }

    fn is_own_target(target: &str) -> bool {
        target == "slimlog" || target.starts_with("slimlog_") || target.starts_with("slimlog::")
    }

    fn is_forwarded(&self, metadata: &tracing::Metadata<'_>) -> bool {
        !Self::is_own_target(metadata.target())
            && Self::convert_level(metadata.level()) >= self.level
    }
}

impl<S> Layer<S> for WriterLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !self.is_forwarded(metadata) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        // A layer has nowhere to report a failed write.
        let _ = self
            .writer
            .write(visitor.finish(), Self::convert_level(metadata.level()));
    }
}

/// Visitor that builds `message key=value ...` from event fields
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }

    fn finish(self) -> String {
        match (self.message, self.fields.is_empty()) {
            (Some(message), true) => message,
            (Some(message), false) => format!("{} {}", message, self.fields),
            (None, _) => self.fields,
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }
}

/// Install a global subscriber that forwards events to `writer`
///
/// Returns `false` if a global subscriber was already set.
pub fn init_logging(writer: Arc<ChannelWriter>) -> bool {
    init_logging_with_level(writer, LogLevel::Debug)
}

/// Install a global subscriber forwarding events at or above `level`
pub fn init_logging_with_level(writer: Arc<ChannelWriter>, level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let subscriber =
        tracing_subscriber::registry().with(WriterLayer::new(writer).with_level(level));

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
