//! slimlog-core - Severity levels, records and errors
//!
//! This crate provides the vocabulary shared by the slimlog crates:
//! - [`LogLevel`] the web framework's eight severity levels
//! - [`Severity`] the channel library's severity scale
//! - [`Record`] the unit a channel logger hands to its handlers
//! - [`ChannelError`] for failures raised by handlers

mod error;
mod level;
mod record;

pub use error::{ChannelError, ChannelResult, ParseLevelError};
pub use level::{DEFAULT_SEVERITY, LogLevel, Severity};
pub use record::Record;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ChannelError, ChannelResult, LogLevel, Record, Severity};
}
