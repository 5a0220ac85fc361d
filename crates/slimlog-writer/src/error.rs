//! Error types for channel writers

use slimlog_core::ChannelError;
use thiserror::Error;

/// Result type alias for writer operations
pub type WriterResult<T> = Result<T, WriterError>;

/// Error returned by [`ChannelWriter::write`](crate::ChannelWriter::write)
#[derive(Error, Debug)]
pub enum WriterError {
    /// A key left unset in a configuration built without defaults
    #[error("writer setting `{0}` is not configured")]
    MissingSetting(&'static str),

    /// Failure raised by the channel or one of its handlers, unchanged
    #[error(transparent)]
    Channel(#[from] ChannelError),
}
