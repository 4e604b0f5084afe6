//! Structured (JSON lines) encoding

use crate::core::{Record, TimestampFormat};
use serde::Serialize;

pub const LEVEL_KEY: &str = "level";
pub const SERVICE_KEY: &str = "service";
pub const TIME_KEY: &str = "time";
pub const CALLER_KEY: &str = "caller";
pub const MESSAGE_KEY: &str = "message";

/// Encodes each record as one JSON object per line.
///
/// Keys are written in this order: `level`, `service`, baseline fields,
/// record fields, `time`, `caller` (when enabled), `message`. Keys and values
/// are serialized one by one instead of through a map, so field order is kept
/// and duplicate keys all appear in the output.
///
/// Example: `{"level":"info","service":"payments","op":"charge","time":"2025-01-08T10:30:45Z","message":"done"}`
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Encode `record` into a newline-terminated line
    pub fn encode(&self, record: &Record<'_>) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);
        let mut writer = ObjectWriter::new(&mut buf);

        writer.entry(LEVEL_KEY, record.level.as_str());
        writer.entry(SERVICE_KEY, record.service);
        for (key, value) in record.all_fields() {
            writer.entry(key, value);
        }
        writer.entry(TIME_KEY, &self.timestamp_format.to_json_value(&record.timestamp));
        if let Some(caller) = record.caller {
            writer.entry(CALLER_KEY, &caller.to_string());
        }
        writer.entry(MESSAGE_KEY, record.message);
        writer.finish();

        buf.push(b'\n');
        buf
    }
}

/// Streams `"key":value` pairs into a JSON object
struct ObjectWriter<'b> {
    buf: &'b mut Vec<u8>,
    first: bool,
}

impl<'b> ObjectWriter<'b> {
    fn new(buf: &'b mut Vec<u8>) -> Self {
        buf.push(b'{');
        Self { buf, first: true }
    }

    fn entry<V: Serialize + ?Sized>(&mut self, key: &str, value: &V) {
        if !self.first {
            self.buf.push(b',');
        }
        self.first = false;
        self.value(key);
        self.buf.push(b':');
        self.value(value);
    }

    fn value<V: Serialize + ?Sized>(&mut self, value: &V) {
        let start = self.buf.len();
        if serde_json::to_writer(&mut *self.buf, value).is_err() {
            self.buf.truncate(start);
            self.buf.extend_from_slice(b"null");
        }
    }

    fn finish(self) {
        self.buf.push(b'}');
    }
}
