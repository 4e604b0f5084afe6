//! # Service Logger
//!
//! Structured, level-filtered logging for services. Every record carries the
//! service identity, the logger's baseline fields and the fields collected on
//! a [`RecordBuilder`], and is written to a [`Sink`] as either one JSON
//! object per line or a human-readable console line.
//!
//! ## Features
//!
//! - **Level filtering**: `trace < debug < info < warn < error < fatal < panic`
//! - **Record builders**: typed fields chained onto one record, committed by `message`
//! - **Derived loggers**: `with_fields` creates independent children with extra baseline fields
//! - **Two encodings**: JSON lines for machines, pretty lines for people
//!
//! ```
//! use service_logger::prelude::*;
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::builder()
//!     .service_name("payments")
//!     .output(buffer.sink())
//!     .build();
//!
//! let request = logger.with_field("request_id", "r-42");
//! request.at_info().string("op", "charge").message("done");
//!
//! let line: serde_json::Value = serde_json::from_str(&buffer.lines()[0]).unwrap();
//! assert_eq!(line["service"], "payments");
//! assert_eq!(line["request_id"], "r-42");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Config, FieldValue, Fields, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        MemorySink, RecordBuilder, Result, Sink, TerminationAction, TerminationHook,
        TimestampFormat,
    };
    pub use crate::formatters::EncodingKind;
}

pub use core::{
    Caller, Config, FieldValue, Fields, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    MemorySink, Record, RecordBuilder, Result, Sink, TerminationAction, TerminationHook,
    TimestampFormat, FATAL_EXIT_CODE, UNKNOWN_SERVICE,
};
pub use formatters::{Encoding, EncodingKind, JsonFormatter, PrettyFormatter};
