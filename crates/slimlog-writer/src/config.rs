//! Writer settings and resolved configuration

use slimlog_channel::{Handler, Processor, StreamHandler};
use std::sync::Arc;

/// Channel name used when settings do not supply one
pub const DEFAULT_CHANNEL_NAME: &str = "SlimMonoLogger";

/// Directory of the default dated log file
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Partial writer configuration supplied by the caller
///
/// Every key is optional. When merged with defaults, each key that is set
/// replaces the default value as a whole; a handler list is never appended
/// to the default handler.
#[derive(Clone, Default)]
pub struct WriterSettings {
    pub name: Option<String>,
    pub handlers: Option<Vec<Arc<dyn Handler>>>,
    pub processors: Option<Vec<Arc<dyn Processor>>>,
}

impl WriterSettings {
    /// Create settings with no keys set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the complete handler list
    pub fn handlers(mut self, handlers: Vec<Arc<dyn Handler>>) -> Self {
        self.handlers = Some(handlers);
        self
    }

    /// Append one handler, setting the key if it was unset
    pub fn handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.get_or_insert_with(Vec::new).push(handler);
        self
    }

    /// Set the complete processor list
    pub fn processors(mut self, processors: Vec<Arc<dyn Processor>>) -> Self {
        self.processors = Some(processors);
        self
    }

    /// Append one processor, setting the key if it was unset
    pub fn processor(mut self, processor: Arc<dyn Processor>) -> Self {
        self.processors.get_or_insert_with(Vec::new).push(processor);
        self
    }
}

impl std::fmt::Debug for WriterSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterSettings")
            .field("name", &self.name)
            .field("handlers", &self.handlers.as_ref().map(Vec::len))
            .field("processors", &self.processors.as_ref().map(Vec::len))
            .finish()
    }
}

/// Resolved writer configuration, immutable once built
///
/// A key can only be unset when defaults were bypassed; the writer reports
/// it when the channel is first built.
#[derive(Clone)]
pub struct WriterConfig {
    name: Option<String>,
    handlers: Option<Vec<Arc<dyn Handler>>>,
    processors: Option<Vec<Arc<dyn Processor>>>,
}

impl WriterConfig {
    /// Default configuration
    ///
    /// Name [`DEFAULT_CHANNEL_NAME`], one [`StreamHandler`] appending to
    /// today's `yy-mm-dd.log` under [`DEFAULT_LOG_DIR`], no processors.
    pub fn defaults() -> Self {
        let handler: Arc<dyn Handler> = Arc::new(StreamHandler::dated(DEFAULT_LOG_DIR));
        Self {
            name: Some(DEFAULT_CHANNEL_NAME.to_string()),
            handlers: Some(vec![handler]),
            processors: Some(Vec::new()),
        }
    }

    /// Resolve settings, overlaying them on the defaults when `merge` is set
    pub fn from_settings(settings: WriterSettings, merge: bool) -> Self {
        if merge {
            Self::merged(settings)
        } else {
            Self::verbatim(settings)
        }
    }

    /// Overlay settings on the defaults, key by key
    pub fn merged(settings: WriterSettings) -> Self {
        let defaults = Self::defaults();
        Self {
            name: settings.name.or(defaults.name),
            handlers: settings.handlers.or(defaults.handlers),
            processors: settings.processors.or(defaults.processors),
        }
    }

    /// Use settings exactly as given
    pub fn verbatim(settings: WriterSettings) -> Self {
        Self {
            name: settings.name,
            handlers: settings.handlers,
            processors: settings.processors,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn handlers(&self) -> Option<&[Arc<dyn Handler>]> {
        self.handlers.as_deref()
    }

    pub fn processors(&self) -> Option<&[Arc<dyn Processor>]> {
        self.processors.as_deref()
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl std::fmt::Debug for WriterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterConfig")
            .field("name", &self.name)
            .field("handlers", &self.handlers.as_ref().map(Vec::len))
            .field("processors", &self.processors.as_ref().map(Vec::len))
            .finish()
    }
}
