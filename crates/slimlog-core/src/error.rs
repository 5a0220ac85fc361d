//! Error types for slimlog channels

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Error raised while dispatching a record through a channel
#[derive(Error, Debug)]
pub enum ChannelError {
    /// A stream handler could not open its target
    #[error("failed to open log stream {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stream handler could not write to its target
    #[error("failed to write log stream {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a user-supplied handler
    #[error("handler error: {0}")]
    Handler(String),
}

impl ChannelError {
    /// Create a handler error from any displayable value
    pub fn handler(message: impl std::fmt::Display) -> Self {
        ChannelError::Handler(message.to_string())
    }
}

/// Error returned when a level name cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);
