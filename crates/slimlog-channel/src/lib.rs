//! slimlog-channel - Named log channels
//!
//! This crate provides:
//! - [`Logger`] a named channel dispatching records to handlers
//! - [`Handler`] and [`Processor`] traits for sinks and record transforms
//! - [`StreamHandler`] appending formatted lines to a file
//! - [`NullHandler`] and [`TestHandler`] for discarding or capturing records

mod handler;
mod logger;
mod processor;
mod stream;

pub use handler::{Handler, NullHandler, TestHandler};
pub use logger::Logger;
pub use processor::Processor;
pub use slimlog_core::{ChannelError, ChannelResult, Record, Severity};
pub use stream::StreamHandler;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Handler, Logger, Processor, Record, Severity, StreamHandler};
}
