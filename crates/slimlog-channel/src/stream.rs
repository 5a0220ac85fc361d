//! File stream handler

use crate::Handler;
use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use serde_json::Value;
use slimlog_core::{ChannelError, ChannelResult, Record, Severity};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one formatted line per record to a file
///
/// The file (and any missing parent directories) is created on the first
/// record, so constructing a handler never touches the filesystem.
///
/// Line layout:
///
/// ```text
/// [2024-05-01 12:00:00] app.WARNING: disk almost full {"mount":"/"} {}
/// ```
pub struct StreamHandler {
    path: PathBuf,
    level: Severity,
    bubble: bool,
    file: Mutex<Option<File>>,
}

impl StreamHandler {
    /// Append to `path`, accepting every severity
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            level: Severity::Debug,
            bubble: true,
            file: Mutex::new(None),
        }
    }

    /// Append to `<dir>/<yy-mm-dd>.log` for today's local date
    pub fn dated(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::dated_file_name(Local::now().date_naive())))
    }

    /// File name used by [`StreamHandler::dated`] for a given date
    pub fn dated_file_name(date: NaiveDate) -> String {
        format!("{}.log", date.format("%y-%m-%d"))
    }

    /// Only handle records at or above `level`
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Whether records continue to later handlers
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Format a record as a single line, newline included
    pub fn format_line(record: &Record) -> String {
        format!(
            "[{}] {}.{}: {} {} {}\n",
            record.datetime.format("%Y-%m-%d %H:%M:%S"),
            record.channel,
            record.severity,
            record.message_text(),
            Value::Object(record.context.clone()),
            Value::Object(record.extra.clone()),
        )
    }

    fn open(&self) -> ChannelResult<File> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ChannelError::Open {
                path: self.path.clone(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| ChannelError::Open {
                path: self.path.clone(),
                source,
            })?;

        tracing::trace!(path = %self.path.display(), "Opened log stream");
        Ok(file)
    }
}

impl Handler for StreamHandler {
    fn is_handling(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    fn handle(&self, record: &Record) -> ChannelResult<bool> {
        let line = Self::format_line(record);

        let mut guard = self.file.lock();
        let file = match guard.take() {
            Some(file) => file,
            None => self.open()?,
        };
        let file = guard.insert(file);

        file.write_all(line.as_bytes())
            .map_err(|source| ChannelError::Write {
                path: self.path.clone(),
                source,
            })?;

        Ok(!self.bubble)
    }
}
