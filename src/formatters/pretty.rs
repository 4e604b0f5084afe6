//! Human-readable console encoding

use crate::core::{Level, Record, TimestampFormat};

/// Encodes a record as a single console line:
///
/// `<time> <LVL> <message> service=<name> key1=value1 key2=value2 ... [caller=file:line]`
///
/// Values are written unquoted. Newlines, carriage returns and tabs in the
/// message, the service name and every field are escaped so one record
/// never spans several lines.
#[derive(Debug, Clone, Default)]
pub struct PrettyFormatter {
    timestamp_format: TimestampFormat,
    no_color: bool,
}

impl PrettyFormatter {
    pub fn new(timestamp_format: TimestampFormat, no_color: bool) -> Self {
        Self {
            timestamp_format,
            no_color,
        }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }

    /// Encode `record` into a newline-terminated line
    pub fn encode(&self, record: &Record<'_>) -> Vec<u8> {
        let mut line = String::with_capacity(128);

        line.push_str(&self.timestamp_format.format(&record.timestamp));
        line.push(' ');
        line.push_str(&self.level_label(record.level));
        line.push(' ');
        line.push_str(&sanitize_message(record.message));

        line.push_str(" service=");
        line.push_str(&sanitize_message(record.service));
        for (key, value) in record.all_fields() {
            line.push(' ');
            line.push_str(&sanitize_message(key));
            line.push('=');
            line.push_str(&sanitize_message(&value.to_string()));
        }
        if let Some(caller) = record.caller {
            line.push_str(" caller=");
            line.push_str(&caller.to_string());
        }

        line.push('\n');
        line.into_bytes()
    }

    #[cfg(feature = "console")]
    fn level_label(&self, level: Level) -> String {
        use colored::Colorize;
        if self.no_color {
            level.abbreviation().to_string()
        } else {
            level.abbreviation().color(level.color_code()).to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_label(&self, level: Level) -> String {
        level.abbreviation().to_string()
    }
}

/// Escape newlines, carriage returns and tabs so a message or field cannot
/// forge additional log lines.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
