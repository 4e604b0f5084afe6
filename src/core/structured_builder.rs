//! Record builder for fluent log record construction
//!
//! A [`RecordBuilder`] is created by one of the `Logger::at_*` factories,
//! collects typed fields and is consumed by [`RecordBuilder::message`].
//! Because `message` takes the builder by value, a committed builder cannot
//! be used again.

use super::log_context::{FieldValue, Fields};
use super::log_entry::{Caller, Record};
use super::log_level::Level;
use super::logger::Logger;
use super::termination::TerminationAction;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Field name used by [`RecordBuilder::with_error`]
pub const ERROR_KEY: &str = "error";

/// State of a record that passed the level filter
struct Pending {
    timestamp: DateTime<Utc>,
    service: String,
    caller: Option<Caller>,
    fields: Fields,
}

/// Builder for a single log record
///
/// The level filter is applied when the builder is created. A filtered
/// builder carries no state and every setter on it is a no-op.
///
/// # Example
///
/// ```
/// use service_logger::{Logger, MemorySink};
///
/// let buffer = MemorySink::new();
/// let logger = Logger::builder().output(buffer.sink()).with_caller(false).build();
///
/// logger.at_info()
///     .string("op", "charge")
///     .integer("cents", 1250)
///     .boolean("retry", false)
///     .message("done");
///
/// assert!(buffer.contents().contains("\"cents\":1250"));
/// ```
#[must_use = "a record is only written when `message` is called"]
pub struct RecordBuilder<'a> {
    logger: &'a Logger,
    level: Level,
    pending: Option<Pending>,
}

impl<'a> RecordBuilder<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Level, caller: Option<Caller>) -> Self {
        let pending = if logger.is_enabled(level) {
            Some(Pending {
                timestamp: Utc::now(),
                service: logger.service_name(),
                caller,
                fields: Fields::new(),
            })
        } else {
            None
        };

        Self {
            logger,
            level,
            pending,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether this record passed the logger's level filter
    pub fn is_enabled(&self) -> bool {
        self.pending.is_some()
    }

    /// Add a field of any supported type
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if let Some(pending) = self.pending.as_mut() {
            pending.fields.push(key, value);
        }
        self
    }

    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(key, FieldValue::String(value.into()))
    }

    pub fn integer(self, key: impl Into<String>, value: i64) -> Self {
        self.field(key, FieldValue::Int(value))
    }

    pub fn float(self, key: impl Into<String>, value: f64) -> Self {
        self.field(key, FieldValue::Float(value))
    }

    pub fn boolean(self, key: impl Into<String>, value: bool) -> Self {
        self.field(key, FieldValue::Bool(value))
    }

    /// Add any serializable value as a structured field
    pub fn generic<T: Serialize + ?Sized>(mut self, key: impl Into<String>, value: &T) -> Self {
        if let Some(pending) = self.pending.as_mut() {
            pending.fields.push(key, FieldValue::from_serialize(value));
        }
        self
    }

    /// Add every field of `fields`, in order
    pub fn fields(mut self, fields: &Fields) -> Self {
        if let Some(pending) = self.pending.as_mut() {
            pending.fields.extend_from(fields);
        }
        self
    }

    /// Add an `error` field holding the error's display text
    pub fn with_error<E: std::error::Error + ?Sized>(mut self, err: &E) -> Self {
        if let Some(pending) = self.pending.as_mut() {
            pending.fields.push(ERROR_KEY, err.to_string());
        }
        self
    }

    /// Write the record with `message` and consume the builder.
    ///
    /// A `&str` is written verbatim; pass `format_args!` for interpolation.
    /// Filtered records are dropped without formatting the message.
    ///
    /// Fatal records end the process and panic records panic, after the
    /// record has been written. This happens even when the record itself was
    /// filtered out. The logger's termination hook can intercept both.
    pub fn message<M: fmt::Display>(self, message: M) {
        let terminal = self.level >= Level::Fatal;
        if self.pending.is_none() && !terminal {
            return;
        }

        let text = message.to_string();
        if let Some(pending) = &self.pending {
            let record = Record {
                level: self.level,
                timestamp: pending.timestamp,
                service: &pending.service,
                baseline: self.logger.baseline(),
                fields: &pending.fields,
                caller: pending.caller,
                message: &text,
            };
            self.logger.write_record(&record);
        }

        if let Some(action) = TerminationAction::for_level(self.level, &text) {
            self.logger.terminate(action);
        }
    }

    /// Write the record with an empty message
    pub fn send(self) {
        self.message("");
    }
}

impl fmt::Debug for RecordBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordBuilder")
            .field("level", &self.level)
            .field("enabled", &self.is_enabled())
            .field("fields", &self.pending.as_ref().map(|p| &p.fields))
            .finish()
    }
}
