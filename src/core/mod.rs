//! Core logger types

pub mod config;
pub mod env;
pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod structured_builder;
pub mod termination;
pub mod timestamp;

pub use config::{Config, UNKNOWN_SERVICE};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, Fields};
pub use log_entry::{Caller, Record};
pub use log_level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::{MemorySink, Sink};
pub use structured_builder::RecordBuilder;
pub use termination::{TerminationAction, TerminationHook, FATAL_EXIT_CODE};
pub use timestamp::TimestampFormat;
