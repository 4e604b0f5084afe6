//! Configuration from environment variables
//!
//! | Variable       | Meaning                                         | Default |
//! |----------------|-------------------------------------------------|---------|
//! | `LOG_LEVEL`    | minimum level name, unknown names fall back     | `info`  |
//! | `LOG_FORMAT`   | `pretty`/`console` for console output, else JSON | `json`  |
//! | `LOG_CALLER`   | `true`/`yes`/`1` to attach caller info          | `true`  |
//! | `SERVICE_NAME` | service identity                                 | unset   |

use super::config::Config;
use super::log_level::Level;
use super::timestamp::TimestampFormat;

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_LOG_CALLER: &str = "LOG_CALLER";
pub const ENV_SERVICE_NAME: &str = "SERVICE_NAME";

impl Config {
    /// Build a configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup.
    ///
    /// ```
    /// use service_logger::{Config, Level};
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "LOG_LEVEL" => Some("warning".to_string()),
    ///     "LOG_FORMAT" => Some("pretty".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.level, Level::Warn);
    /// assert!(config.pretty);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup(ENV_LOG_LEVEL)
            .and_then(|value| value.parse::<Level>().ok())
            .unwrap_or(Level::Info);
        let format = lookup(ENV_LOG_FORMAT).unwrap_or_else(|| "json".to_string());
        let with_caller = lookup(ENV_LOG_CALLER)
            .map(|value| parse_bool(&value))
            .unwrap_or(true);

        Config {
            level,
            pretty: matches!(format.as_str(), "pretty" | "console"),
            with_caller,
            time_format: Some(TimestampFormat::Iso8601),
            service_name: lookup(ENV_SERVICE_NAME).unwrap_or_default(),
            ..Config::default()
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "1")
}
