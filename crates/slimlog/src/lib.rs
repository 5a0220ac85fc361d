//! # slimlog
//!
//! Forward a web framework's log calls to structured log channels.
//!
//! The framework hands its log writer a message and one of eight severity
//! levels. slimlog's [`ChannelWriter`] accepts exactly that call, builds a
//! named [`Logger`] channel the first time it is used, translates the level
//! to the channel's [`Severity`] scale and adds the record:
//! - handlers ([`StreamHandler`], or any [`Handler`]) persist or ship records
//! - processors (any [`Processor`], including closures) enrich records first
//! - unknown level codes are written as [`Severity::Warning`]
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! slimlog = "0.3"
//! ```
//!
//! ## Writing Logs
//!
//! ```ignore
//! use slimlog::prelude::*;
//! use std::sync::Arc;
//!
//! let writer = ChannelWriter::new(
//!     WriterSettings::new()
//!         .name("SlimMonoLogger")
//!         .handler(Arc::new(StreamHandler::new("./logs/app.log")))
//!         .processor(Arc::new(|record: Record| {
//!             record.with_extra("dummy", "Hello world!")
//!         })),
//! );
//!
//! writer.write("Application started", LogLevel::Info)?;
//! ```
//!
//! Without settings the writer uses the channel name `SlimMonoLogger` and a
//! single handler appending to `./logs/<yy-mm-dd>.log`. Pass `false` to
//! [`ChannelWriter::with_merge`] to skip the defaults entirely.
//!
//! ## Crate Organization
//!
//! - [`slimlog_core`] - Levels, severities, records and channel errors
//! - [`slimlog_channel`] - Channels, handlers and processors
//! - [`slimlog_writer`] - The framework writer and its tracing layer

// Re-export core types
pub use slimlog_core::{
    ChannelError, ChannelResult, DEFAULT_SEVERITY, LogLevel, ParseLevelError, Record, Severity,
};

// Re-export channel types
pub use slimlog_channel::{Handler, Logger, NullHandler, Processor, StreamHandler, TestHandler};

// Re-export writer types
pub use slimlog_writer::{
    ChannelWriter, DEFAULT_CHANNEL_NAME, DEFAULT_LOG_DIR, WriterConfig, WriterError, WriterLayer,
    WriterResult, WriterSettings, init_logging, init_logging_with_level,
};

// Re-export common dependencies that writer users need
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use slimlog::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        ChannelWriter, Handler, LogLevel, Logger, Processor, Record, Severity, StreamHandler,
        WriterError, WriterResult, WriterSettings,
    };
}
