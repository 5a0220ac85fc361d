//! slimlog-writer - Framework log writer for slimlog channels
//!
//! This crate provides:
//! - [`ChannelWriter`] the log writer a web framework calls with a message
//!   and a level; it builds its channel on first use
//! - [`WriterSettings`] and [`WriterConfig`] for configuring the channel
//! - [`WriterLayer`] tracing layer that routes events through a writer

mod config;
mod error;
mod layer;
mod writer;

pub use config::{DEFAULT_CHANNEL_NAME, DEFAULT_LOG_DIR, WriterConfig, WriterSettings};
pub use error::{WriterError, WriterResult};
pub use layer::{WriterLayer, init_logging, init_logging_with_level};
pub use slimlog_core::LogLevel;
pub use writer::ChannelWriter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ChannelWriter, LogLevel, WriterConfig, WriterError, WriterLayer, WriterResult,
        WriterSettings, init_logging,
    };
}
