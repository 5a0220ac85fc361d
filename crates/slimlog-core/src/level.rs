//! Framework log levels and channel severities
//!
//! Two closed scales are involved when a framework log call reaches a channel:
//!
//! ```text
//! LogLevel (code)   Severity (value)
//! EMERGENCY (1)  →  EMERGENCY (600)
//! ALERT     (2)  →  ALERT     (550)
//! CRITICAL  (3)  →  CRITICAL  (500)
//! ERROR     (4)  →  ERROR     (400)
//! WARN      (5)  →  WARNING   (300)
//! NOTICE    (6)  →  NOTICE    (250)
//! INFO      (7)  →  INFO      (200)
//! DEBUG     (8)  →  DEBUG     (100)
//! ```
//!
//! Codes outside the table translate to [`DEFAULT_SEVERITY`].

use crate::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Severity used when a framework level code has no mapping
pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

/// Log levels of the web framework, most urgent first
///
/// Numeric codes follow the framework: `Emergency` is 1, `Debug` is 8.
/// Ordering follows urgency, so `Emergency` is the greatest level.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Emergency = 1,
    Alert = 2,
    Critical = 3,
    Error = 4,
    Warn = 5,
    Notice = 6,
    Info = 7,
    Debug = 8,
}

impl LogLevel {
    /// Framework alias for [`LogLevel::Critical`]
    pub const FATAL: LogLevel = LogLevel::Critical;

    /// All levels, most urgent first
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Numeric code of this level
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a level by its numeric code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(LogLevel::Emergency),
            2 => Some(LogLevel::Alert),
            3 => Some(LogLevel::Critical),
            4 => Some(LogLevel::Error),
            5 => Some(LogLevel::Warn),
            6 => Some(LogLevel::Notice),
            7 => Some(LogLevel::Info),
            8 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Channel severity for this level
    pub const fn severity(self) -> Severity {
        match self {
            LogLevel::Emergency => Severity::Emergency,
            LogLevel::Alert => Severity::Alert,
            LogLevel::Critical => Severity::Critical,
            LogLevel::Error => Severity::Error,
            LogLevel::Warn => Severity::Warning,
            LogLevel::Notice => Severity::Notice,
            LogLevel::Info => Severity::Info,
            LogLevel::Debug => Severity::Debug,
        }
    }
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    // Lower codes are more urgent.
    fn cmp(&self, other: &Self) -> Ordering {
        other.code().cmp(&self.code())
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.code()
    }
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Self {
        level.severity()
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergency" => Ok(LogLevel::Emergency),
            "alert" => Ok(LogLevel::Alert),
            "critical" | "fatal" => Ok(LogLevel::Critical),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "notice" => Ok(LogLevel::Notice),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Emergency => write!(f, "EMERGENCY"),
            LogLevel::Alert => write!(f, "ALERT"),
            LogLevel::Critical => write!(f, "CRITICAL"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Notice => write!(f, "NOTICE"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
        }
    }
}

/// Severity scale of the channel library (RFC 5424 ordering)
#[repr(u16)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug = 100,
    Info = 200,
    Notice = 250,
    Warning = 300,
    Error = 400,
    Critical = 500,
    Alert = 550,
    Emergency = 600,
}

impl Severity {
    /// Numeric value of this severity
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Look up a severity by its numeric value
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            100 => Some(Severity::Debug),
            200 => Some(Severity::Info),
            250 => Some(Severity::Notice),
            300 => Some(Severity::Warning),
            400 => Some(Severity::Error),
            500 => Some(Severity::Critical),
            550 => Some(Severity::Alert),
            600 => Some(Severity::Emergency),
            _ => None,
        }
    }

    /// Translate a framework level code, falling back to `default` for
    /// codes the framework does not define
    pub const fn from_level_code(code: u8, default: Severity) -> Severity {
        match LogLevel::from_code(code) {
            Some(level) => level.severity(),
            None => default,
        }
    }

    /// Upper-case name used in formatted output
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
        }
    }
}

impl FromStr for Severity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "notice" => Ok(Severity::Notice),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            "alert" => Ok(Severity::Alert),
            "emergency" => Ok(Severity::Emergency),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
