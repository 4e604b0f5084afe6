//! Main logger implementation

use super::{
    config::{Config, UNKNOWN_SERVICE},
    error::Result,
    log_context::{FieldValue, Fields},
    log_entry::{Caller, Record},
    log_level::Level,
    metrics::LoggerMetrics,
    sink::Sink,
    structured_builder::RecordBuilder,
    termination::{default_termination_hook, TerminationAction, TerminationHook},
    timestamp::TimestampFormat,
};
use crate::formatters::{Encoding, EncodingKind};
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Level-filtered logger tagged with a service identity.
///
/// The sink and encoding are fixed when the logger is built. The minimum
/// level and the service name can be changed later through `&self`; both are
/// guarded by read-write locks, so a logger can be shared across threads
/// (for example behind an `Arc`) while it is being reconfigured.
///
/// Loggers derived with [`Logger::with_fields`] (or cloned) get their own
/// copy of the level and service name. Changing either on a parent does not
/// reach children that already exist, and the other way round.
pub struct Logger {
    min_level: RwLock<Level>,
    service_name: RwLock<String>,
    baseline: Arc<Fields>,
    sink: Sink,
    encoding: Arc<Encoding>,
    with_caller: bool,
    on_terminate: TerminationHook,
}

impl Logger {
    /// Build a logger from a configuration.
    ///
    /// A missing sink becomes standard error, an empty service name becomes
    /// `UNKNOWN-SERVICE` and a missing or empty timestamp format becomes
    /// RFC 3339.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let service_name = config.resolved_service_name();
        let time_format = config.resolved_time_format();
        let encoding = Encoding::select(config.pretty, time_format, config.no_color);

        Self {
            min_level: RwLock::new(config.level),
            service_name: RwLock::new(service_name),
            baseline: Arc::new(Fields::new()),
            sink: config.output.unwrap_or_else(Sink::stderr),
            encoding: Arc::new(encoding),
            with_caller: config.with_caller,
            on_terminate: config.on_terminate.unwrap_or_else(default_termination_hook),
        }
    }

    /// Logger configured from `LOG_LEVEL`, `LOG_FORMAT`, `LOG_CALLER` and `SERVICE_NAME`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Info level, JSON lines, no caller info, writing to stderr
    #[must_use]
    pub fn production() -> Self {
        Self::new(Config::production())
    }

    /// Debug level, pretty output with caller info and nanosecond timestamps
    #[must_use]
    pub fn development() -> Self {
        Self::new(Config::development())
    }

    /// Info level, pretty output with caller info and RFC 3339 timestamps
    #[must_use]
    pub fn pretty_default() -> Self {
        Self::new(Config {
            pretty: true,
            ..Config::default()
        })
    }

    pub fn level(&self) -> Level {
        *self.min_level.read()
    }

    /// Replace the minimum level for records created from now on
    pub fn set_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level.admits(self.level())
    }

    pub fn service_name(&self) -> String {
        self.service_name.read().clone()
    }

    /// Change the service identity written with every record.
    ///
    /// An empty name is replaced by `UNKNOWN-SERVICE`.
    pub fn set_service_name(&self, name: impl Into<String>) {
        let mut name = name.into();
        if name.is_empty() {
            name = UNKNOWN_SERVICE.to_string();
        }
        *self.service_name.write() = name;
    }

    /// Fields attached to every record of this logger
    pub fn baseline(&self) -> &Fields {
        &self.baseline
    }

    pub fn encoding_kind(&self) -> EncodingKind {
        self.encoding.kind()
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        self.encoding.timestamp_format()
    }

    pub fn includes_caller(&self) -> bool {
        self.with_caller
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Write counters of the sink, shared with every logger using it
    pub fn metrics(&self) -> &LoggerMetrics {
        self.sink.metrics()
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Derive a logger whose baseline is this logger's baseline plus `fields`.
    ///
    /// Keys in `fields` override baseline keys of the same name. The child
    /// shares the sink and encoding, starts with the current level and
    /// service name, and is independent from then on.
    ///
    /// # Example
    ///
    /// ```
    /// use service_logger::{Logger, MemorySink};
    ///
    /// let buffer = MemorySink::new();
    /// let logger = Logger::builder().output(buffer.sink()).build();
    /// let request = logger.with_fields([("request_id", "r-1"), ("user_id", "u-9")]);
    ///
    /// request.at_info().message("handled");
    /// assert!(buffer.contents().contains("\"request_id\":\"r-1\""));
    /// assert!(logger.baseline().is_empty());
    /// ```
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut baseline = Fields::clone(&self.baseline);
        for (key, value) in fields {
            baseline.upsert(key, value);
        }
        self.derive(Arc::new(baseline))
    }

    /// Derive a logger with one extra baseline field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_fields([(key, value)])
    }

    fn derive(&self, baseline: Arc<Fields>) -> Logger {
        Logger {
            min_level: RwLock::new(self.level()),
            service_name: RwLock::new(self.service_name()),
            baseline,
            sink: self.sink.clone(),
            encoding: Arc::clone(&self.encoding),
            with_caller: self.with_caller,
            on_terminate: Arc::clone(&self.on_terminate),
        }
    }

    /// Start a record at `level`
    #[track_caller]
    pub fn at(&self, level: Level) -> RecordBuilder<'_> {
        let caller = if self.with_caller {
            Some(Caller::from_location(Location::caller()))
        } else {
            None
        };
        RecordBuilder::new(self, level, caller)
    }

    #[track_caller]
    pub fn at_trace(&self) -> RecordBuilder<'_> {
        self.at(Level::Trace)
    }

    #[track_caller]
    pub fn at_debug(&self) -> RecordBuilder<'_> {
        self.at(Level::Debug)
    }

    #[track_caller]
    pub fn at_info(&self) -> RecordBuilder<'_> {
        self.at(Level::Info)
    }

    #[track_caller]
    pub fn at_warn(&self) -> RecordBuilder<'_> {
        self.at(Level::Warn)
    }

    #[track_caller]
    pub fn at_error(&self) -> RecordBuilder<'_> {
        self.at(Level::Error)
    }

    /// Start a fatal record; committing it ends the process after the write
    #[track_caller]
    pub fn at_fatal(&self) -> RecordBuilder<'_> {
        self.at(Level::Fatal)
    }

    /// Start a panic record; committing it panics after the write
    #[track_caller]
    pub fn at_panic(&self) -> RecordBuilder<'_> {
        self.at(Level::Panic)
    }

    /// Same as `self.at(level).message(message)`
    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        self.at(level).message(message);
    }

    #[inline]
    #[track_caller]
    pub fn trace_msg(&self, message: impl fmt::Display) {
        self.log(Level::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug_msg(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info_msg(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn_msg(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error_msg(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal_msg(&self, message: impl fmt::Display) {
        self.log(Level::Fatal, message);
    }

    #[inline]
    #[track_caller]
    pub fn panic_msg(&self, message: impl fmt::Display) {
        self.log(Level::Panic, message);
    }

    /// Encode and write one record
    pub(crate) fn write_record(&self, record: &Record<'_>) {
        let bytes = self.encoding.encode(record);
        self.sink.write_record(&bytes);
    }

    pub(crate) fn terminate(&self, action: TerminationAction) {
        (self.on_terminate)(action);
    }
}

impl Clone for Logger {
    /// Independent copy sharing only the sink and encoding
    fn clone(&self) -> Self {
        self.derive(Arc::clone(&self.baseline))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.level())
            .field("service_name", &self.service_name())
            .field("baseline", &self.baseline)
            .field("sink", &self.sink)
            .field("encoding", &self.encoding.kind())
            .field("with_caller", &self.with_caller)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use service_logger::prelude::*;
///
/// let buffer = MemorySink::new();
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .service_name("payments")
///     .output(buffer.sink())
///     .with_caller(false)
///     .build();
///
/// logger.at_debug().string("op", "charge").message("started");
/// assert!(buffer.contents().contains("\"service\":\"payments\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.config.level = level;
        self
    }

    /// Enable or disable the pretty console encoding
    #[must_use = "builder methods return a new value"]
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.config.pretty = enabled;
        self
    }

    /// Enable or disable caller information
    #[must_use = "builder methods return a new value"]
    pub fn with_caller(mut self, enabled: bool) -> Self {
        self.config.with_caller = enabled;
        self
    }

    /// Set the destination for log output
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, sink: Sink) -> Self {
        self.config.output = Some(sink);
        self
    }

    /// Set the timestamp format
    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimestampFormat) -> Self {
        self.config.time_format = Some(format);
        self
    }

    /// Set a strftime-compatible timestamp format
    #[must_use = "builder methods return a new value"]
    pub fn custom_time_format(mut self, format_str: &str) -> Self {
        self.config.time_format = Some(TimestampFormat::Custom(format_str.to_string()));
        self
    }

    /// Set the service name written with every record
    #[must_use = "builder methods return a new value"]
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    /// Disable ANSI colors in the pretty encoding
    #[must_use = "builder methods return a new value"]
    pub fn no_color(mut self, disabled: bool) -> Self {
        self.config.no_color = disabled;
        self
    }

    /// Intercept the termination of fatal and panic records
    ///
    /// # Example
    ///
    /// ```
    /// use service_logger::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let hook_seen = Arc::clone(&seen);
    /// let logger = Logger::builder()
    ///     .output(MemorySink::new().sink())
    ///     .on_terminate(Arc::new(move |action: TerminationAction| hook_seen.lock().unwrap().push(action)))
    ///     .build();
    ///
    /// logger.at_fatal().message("disk gone");
    /// assert_eq!(seen.lock().unwrap()[0], TerminationAction::Exit { code: 1 });
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn on_terminate(mut self, hook: TerminationHook) -> Self {
        self.config.on_terminate = Some(hook);
        self
    }

    /// Info level, JSON lines, no caller info, RFC 3339 timestamps
    #[must_use = "builder methods return a new value"]
    pub fn production(mut self) -> Self {
        self.config = self.config.into_production();
        self
    }

    /// Debug level, pretty output, caller info, nanosecond timestamps
    #[must_use = "builder methods return a new value"]
    pub fn development(mut self) -> Self {
        self.config = self.config.into_development();
        self
    }

    /// The configuration assembled so far
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger::new(self.config)
    }
}

impl From<Config> for LoggerBuilder {
    fn from(config: Config) -> Self {
        Self::from_config(config)
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
