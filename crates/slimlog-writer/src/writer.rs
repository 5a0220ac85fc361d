//! Framework log writer backed by a lazily built channel

use crate::{WriterConfig, WriterError, WriterResult, WriterSettings};
use once_cell::sync::OnceCell;
use serde_json::Value;
use slimlog_channel::Logger;
use slimlog_core::{DEFAULT_SEVERITY, Severity};
use std::sync::Arc;

type ChannelFactory = dyn Fn(&str) -> Logger + Send + Sync;

/// Log writer the web framework calls with a message and a level code
///
/// The channel is built on the first [`write`](Self::write), registering the
/// configured handlers and then processors in order. Concurrent first writes
/// still build it exactly once.
///
/// # Example
///
/// ```ignore
/// let writer = ChannelWriter::new(
///     WriterSettings::new()
///         .name("SlimMonoLogger")
///         .handler(Arc::new(StreamHandler::new("./logs/app.log")))
///         .processor(Arc::new(|record: Record| record.with_extra("dummy", "Hello world!"))),
/// );
///
/// writer.write("Application started", LogLevel::Info)?;
/// ```
pub struct ChannelWriter {
    config: WriterConfig,
    channel: OnceCell<Logger>,
    factory: Box<ChannelFactory>,
}

impl ChannelWriter {
    /// Create a writer from settings merged over the defaults
    pub fn new(settings: WriterSettings) -> Self {
        Self::with_merge(settings, true)
    }

    /// Create a writer, merging defaults only when `merge` is set
    pub fn with_merge(settings: WriterSettings, merge: bool) -> Self {
        Self::from_config(WriterConfig::from_settings(settings, merge))
    }

    /// Create a writer from a resolved configuration
    pub fn from_config(config: WriterConfig) -> Self {
        Self {
            config,
            channel: OnceCell::new(),
            factory: Box::new(|name: &str| Logger::new(name)),
        }
    }

    /// Replace the function that creates the empty channel
    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Logger + Send + Sync + 'static,
    {
        self.factory = Box::new(factory);
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Whether the channel has been built
    pub fn is_initialized(&self) -> bool {
        self.channel.get().is_some()
    }

    /// The channel, once built
    pub fn channel(&self) -> Option<&Logger> {
        self.channel.get()
    }

    /// Write a message at a framework level
    ///
    /// `level` may be a [`LogLevel`](slimlog_core::LogLevel) or a raw code;
    /// codes the framework does not define are written as
    /// [`Severity::Warning`].
    pub fn write(&self, message: impl Into<Value>, level: impl Into<u8>) -> WriterResult<()> {
        let mut created = false;
        let channel = self.channel.get_or_try_init(|| {
            created = true;
            self.build_channel()
        })?;

        if created {
            tracing::debug!(
                channel = channel.name(),
                handlers = channel.handlers().len(),
                processors = channel.processors().len(),
                "Created log channel"
            );
        }

        let severity = Severity::from_level_code(level.into(), DEFAULT_SEVERITY);
        channel.add_record(severity, message)?;
        Ok(())
    }

    fn build_channel(&self) -> WriterResult<Logger> {
        let name = self
            .config
            .name()
            .ok_or(WriterError::MissingSetting("name"))?;
        let handlers = self
            .config
            .handlers()
            .ok_or(WriterError::MissingSetting("handlers"))?;
        let processors = self
            .config
            .processors()
            .ok_or(WriterError::MissingSetting("processors"))?;

        let mut channel = (self.factory)(name);
        for handler in handlers {
            channel.push_handler(Arc::clone(handler));
        }
        for processor in processors {
            channel.push_processor(Arc::clone(processor));
        }
        Ok(channel)
    }
}

impl std::fmt::Debug for ChannelWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelWriter")
            .field("config", &self.config)
            .field("channel", &self.channel.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
