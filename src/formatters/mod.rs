//! Output encodings
//!
//! A logger picks one encoding when it is built and keeps it for its whole
//! life. Children derived from it reuse the same encoding.

pub mod json;
pub mod pretty;

pub use json::JsonFormatter;
pub use pretty::PrettyFormatter;

use crate::core::{Record, TimestampFormat};

/// Which encoding a logger uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingKind {
    Structured,
    Pretty,
}

/// The encoding selected for a logger
#[derive(Debug, Clone)]
pub enum Encoding {
    /// One JSON object per line
    Structured(JsonFormatter),
    /// Human-readable console line
    Pretty(PrettyFormatter),
}

impl Encoding {
    /// Resolve the encoding from configuration flags
    pub fn select(pretty: bool, timestamp_format: TimestampFormat, no_color: bool) -> Self {
        if pretty {
            Encoding::Pretty(PrettyFormatter::new(timestamp_format, no_color))
        } else {
            Encoding::Structured(JsonFormatter::new(timestamp_format))
        }
    }

    pub fn kind(&self) -> EncodingKind {
        match self {
            Encoding::Structured(_) => EncodingKind::Structured,
            Encoding::Pretty(_) => EncodingKind::Pretty,
        }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        match self {
            Encoding::Structured(f) => f.timestamp_format(),
            Encoding::Pretty(f) => f.timestamp_format(),
        }
    }

    /// Encode one record as a newline-terminated line
    pub fn encode(&self, record: &Record<'_>) -> Vec<u8> {
        match self {
            Encoding::Structured(f) => f.encode(record),
            Encoding::Pretty(f) => f.encode(record),
        }
    }
}
