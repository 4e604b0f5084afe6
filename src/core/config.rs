//! Logger configuration

use super::log_level::Level;
use super::sink::Sink;
use super::termination::TerminationHook;
use super::timestamp::TimestampFormat;
use std::fmt;

/// Service name used when none is configured
pub const UNKNOWN_SERVICE: &str = "UNKNOWN-SERVICE";

/// Everything needed to build a [`Logger`](super::logger::Logger).
///
/// A `Config` is consumed by `Logger::new`, so changing a config afterwards
/// (or a clone of it) never affects a logger that was already built.
#[derive(Clone)]
pub struct Config {
    /// Minimum level of records to write
    pub level: Level,
    /// Use the pretty console encoding instead of JSON lines
    pub pretty: bool,
    /// Attach `file:line` of the logging call
    pub with_caller: bool,
    /// Destination; standard error when `None`
    pub output: Option<Sink>,
    /// Timestamp format; RFC 3339 when `None` or an empty custom pattern
    pub time_format: Option<TimestampFormat>,
    /// Service identity; `UNKNOWN-SERVICE` when empty
    pub service_name: String,
    /// Disable ANSI colors in the pretty encoding
    pub no_color: bool,
    /// Receives the action of fatal and panic records
    pub on_terminate: Option<TerminationHook>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            pretty: false,
            with_caller: true,
            output: None,
            time_format: Some(TimestampFormat::Rfc3339),
            service_name: String::new(),
            no_color: false,
            on_terminate: None,
        }
    }
}

impl Config {
    /// Info level, JSON lines, no caller, RFC 3339 timestamps
    pub fn production() -> Self {
        Self::default().into_production()
    }

    /// Debug level, pretty output, caller info, nanosecond timestamps
    pub fn development() -> Self {
        Self::default().into_development()
    }

    pub(crate) fn into_production(mut self) -> Self {
        self.level = Level::Info;
        self.pretty = false;
        self.with_caller = false;
        self.time_format = Some(TimestampFormat::Rfc3339);
        self
    }

    pub(crate) fn into_development(mut self) -> Self {
        self.level = Level::Debug;
        self.pretty = true;
        self.with_caller = true;
        self.time_format = Some(TimestampFormat::Rfc3339Nano);
        self
    }

    /// Service name after substituting the placeholder for an empty one
    pub fn resolved_service_name(&self) -> String {
        if self.service_name.is_empty() {
            UNKNOWN_SERVICE.to_string()
        } else {
            self.service_name.clone()
        }
    }

    /// Timestamp format after substituting the default for a missing one
    pub fn resolved_time_format(&self) -> TimestampFormat {
        TimestampFormat::resolve(self.time_format.as_ref())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("level", &self.level)
            .field("pretty", &self.pretty)
            .field("with_caller", &self.with_caller)
            .field("output", &self.output)
            .field("time_format", &self.time_format)
            .field("service_name", &self.service_name)
            .field("no_color", &self.no_color)
            .field("on_terminate", &self.on_terminate.as_ref().map(|_| "custom"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.level, Level::Info);
        assert!(!config.pretty);
        assert!(config.with_caller);
        assert!(config.output.is_none());
        assert_eq!(config.resolved_time_format(), TimestampFormat::Rfc3339);
        assert_eq!(config.resolved_service_name(), UNKNOWN_SERVICE);
    }

    #[test]
    fn test_presets() {
        let production = Config::production();
        assert_eq!(production.level, Level::Info);
        assert!(!production.pretty);
        assert!(!production.with_caller);

        let development = Config::development();
        assert_eq!(development.level, Level::Debug);
        assert!(development.pretty);
        assert!(development.with_caller);
        assert_eq!(development.time_format, Some(TimestampFormat::Rfc3339Nano));
    }

    #[test]
    fn test_empty_time_format_resolves_to_default() {
        let config = Config {
            time_format: Some(TimestampFormat::Custom(String::new())),
            ..Config::default()
        };
        assert_eq!(config.resolved_time_format(), TimestampFormat::Rfc3339);
    }
}
