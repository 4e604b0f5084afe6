//! Timestamp formatting utilities
//!
//! Provides standardized, configurable timestamp formats for log output.
//! Supports ISO 8601, RFC 3339, Unix timestamps, and custom formats.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Standardized timestamp format options
///
/// The format is carried by each logger, so two loggers built with different
/// formats never affect each other.
///
/// # Examples
///
/// ```
/// use service_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// // Output: "2025-01-08T10:30:45.123Z"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 with whole seconds: `2025-01-08T10:30:45Z`
    ///
    /// This is the default format.
    #[default]
    Rfc3339,

    /// RFC 3339 with nanoseconds: `2025-01-08T10:30:45.123456000Z`
    Rfc3339Nano,

    /// Wall clock time only: `10:30:45`
    Clock,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// ```
    /// use service_logger::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Nano => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
            TimestampFormat::Clock => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                // An invalid pattern must not take the logging call down with it
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.to_rfc3339_opts(SecondsFormat::Secs, true);
                }
                out
            }
        }
    }

    /// Value for the `time` key of a JSON record; numeric formats stay numbers.
    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::Unix => serde_json::Value::Number(datetime.timestamp().into()),
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            TimestampFormat::UnixMicros => {
                serde_json::Value::Number(datetime.timestamp_micros().into())
            }
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros
        )
    }

    /// An empty custom pattern carries no format at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, TimestampFormat::Custom(pattern) if pattern.trim().is_empty())
    }

    /// Resolve an optional, possibly empty format to a usable one.
    #[must_use]
    pub fn resolve(format: Option<&TimestampFormat>) -> TimestampFormat {
        match format {
            Some(format) if !format.is_empty() => format.clone(),
            _ => TimestampFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_rfc3339_nano_format() {
        let result = TimestampFormat::Rfc3339Nano.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456000Z");
    }

    #[test]
    fn test_clock_format() {
        let result = TimestampFormat::Clock.format(&fixed_datetime());
        assert_eq!(result, "10:30:45");
    }

    #[test]
    fn test_unix_formats_increase_in_precision() {
        let secs: i64 = TimestampFormat::Unix.format(&fixed_datetime()).parse().unwrap();
        let millis: i64 = TimestampFormat::UnixMillis.format(&fixed_datetime()).parse().unwrap();
        let micros: i64 = TimestampFormat::UnixMicros.format(&fixed_datetime()).parse().unwrap();
        assert_eq!(millis / 1000, secs);
        assert_eq!(micros / 1000, millis);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_format_falls_back() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_json_value_for_numeric_formats() {
        let value = TimestampFormat::UnixMillis.to_json_value(&fixed_datetime());
        assert!(value.is_number());
        let value = TimestampFormat::Rfc3339.to_json_value(&fixed_datetime());
        assert_eq!(value, serde_json::json!("2025-01-08T10:30:45Z"));
    }

    #[test]
    fn test_is_numeric() {
        assert!(!TimestampFormat::Iso8601.is_numeric());
        assert!(!TimestampFormat::Rfc3339Nano.is_numeric());
        assert!(TimestampFormat::Unix.is_numeric());
        assert!(TimestampFormat::UnixMicros.is_numeric());
        assert!(!TimestampFormat::Custom("%s".to_string()).is_numeric());
    }

    #[test]
    fn test_resolve_missing_or_empty() {
        assert_eq!(TimestampFormat::resolve(None), TimestampFormat::Rfc3339);
        let empty = TimestampFormat::Custom(String::new());
        assert_eq!(TimestampFormat::resolve(Some(&empty)), TimestampFormat::Rfc3339);
        assert_eq!(
            TimestampFormat::resolve(Some(&TimestampFormat::Clock)),
            TimestampFormat::Clock
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Iso8601).expect("serialize");
        assert_eq!(json, "\"Iso8601\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
