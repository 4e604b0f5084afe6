//! Log record structure

use super::log_context::{FieldValue, Fields};
use super::log_level::Level;
use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::Location;

/// Source location of the call that created a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A fully assembled record, borrowed by the encoders while it is rendered.
///
/// Baseline fields come from the logger and are written before the fields
/// accumulated on the record builder.
#[derive(Debug)]
pub struct Record<'a> {
    pub level: Level,
    pub timestamp: DateTime<Utc>,
    pub service: &'a str,
    pub baseline: &'a Fields,
    pub fields: &'a Fields,
    pub caller: Option<Caller>,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Baseline fields followed by accumulated fields
    pub fn all_fields(&self) -> impl Iterator<Item = (&'a str, &'a FieldValue)> + 'a {
        let baseline: &'a Fields = self.baseline;
        let fields: &'a Fields = self.fields;
        baseline.iter().chain(fields.iter())
    }
}
