//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Levels are totally ordered, `Trace < Debug < Info < Warn < Error < Fatal < Panic`,
/// and carry small signed discriminants, from `Trace = -1` up to `Panic = 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Level {
    Trace = -1,
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }

    /// Three letter uppercase tag used by the pretty encoding.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Level::Trace => "TRC",
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error => "ERR",
            Level::Fatal => "FTL",
            Level::Panic => "PNC",
        }
    }

    /// Raw discriminant of this level.
    pub fn as_i8(&self) -> i8 {
        *self as i8
    }

    /// Map a raw discriminant back to a level.
    pub fn from_i8(value: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_i8() == value)
    }

    /// Name of a raw level value, `"unknown"` when it is outside the closed set.
    pub fn name_of(value: i8) -> &'static str {
        Self::from_i8(value).map_or("unknown", |level| level.as_str())
    }

    /// Whether a record at `self` passes a `threshold` minimum level.
    #[inline]
    pub fn admits(&self, threshold: Level) -> bool {
        *self >= threshold
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Trace => Magenta,
            Level::Debug => Yellow,
            Level::Info => Green,
            Level::Warn => Red,
            Level::Error => BrightRed,
            Level::Fatal => BrightRed,
            Level::Panic => BrightRed,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<i8> for Level {
    type Error = LoggerError;

    fn try_from(value: i8) -> Result<Self, LoggerError> {
        Self::from_i8(value).ok_or_else(|| LoggerError::invalid_level(value.to_string()))
    }
}
