//! Destination sinks for encoded records
//!
//! A [`Sink`] wraps anything that accepts bytes. Each record is handed over
//! with one `write_all` followed by a `flush`, so nothing stays buffered in
//! the logger when the process exits.

use super::error::{LoggerError, Result};
use super::metrics::LoggerMetrics;
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Shared handle to a byte destination.
///
/// Cloning a sink is cheap and every clone writes to the same destination
/// and reports into the same [`LoggerMetrics`].
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    metrics: Arc<LoggerMetrics>,
    name: Arc<str>,
}

impl Sink {
    /// Wrap any writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", writer)
    }

    fn named<W: Write + Send + 'static>(name: &str, writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            metrics: Arc::new(LoggerMetrics::new()),
            name: Arc::from(name),
        }
    }

    /// The process standard error stream
    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    /// The process standard output stream
    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    /// Append to a file, creating it when missing
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use service_logger::Sink;
    ///
    /// let sink = Sink::file("/var/log/payments.log").expect("open log file");
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::named("file", file))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether two handles point at the same destination
    pub fn same_destination(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Write one encoded record.
    ///
    /// Errors are counted and reported on stderr but never returned: a lost
    /// log line must not disturb the caller.
    pub fn write_record(&self, bytes: &[u8]) {
        let result = {
            let mut writer = self.writer.lock();
            writer.write_all(bytes).and_then(|()| writer.flush())
        };

        match result {
            Ok(()) => {
                self.metrics.record_written(bytes.len());
            }
            Err(e) => {
                let previous = self.metrics.record_write_failure();
                // Alert on first failure and periodically thereafter
                if previous == 0 || (previous + 1) % 1000 == 0 {
                    eprintln!(
                        "[LOGGER ERROR] Sink '{}' write failed ({} records lost): {}",
                        self.name,
                        previous + 1,
                        e
                    );
                }
            }
        }
    }

    /// Flush the destination
    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("records_written", &self.metrics.records_written())
            .finish()
    }
}

/// In-memory destination, mostly useful in tests.
///
/// Clones share one buffer, so a clone can be handed to a [`Sink`] while the
/// original is kept to read back what was written.
///
/// ```
/// use service_logger::{Logger, MemorySink};
///
/// let buffer = MemorySink::new();
/// let logger = Logger::builder().output(buffer.sink()).build();
/// logger.at_info().message("ready");
/// assert_eq!(buffer.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`Sink`] writing into this buffer
    pub fn sink(&self) -> Sink {
        Sink::named("memory", self.clone())
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
