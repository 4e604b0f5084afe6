//! Sink metrics for observability
//!
//! Writes to a sink are best-effort and their failures never reach the code
//! that logged. These counters are where such failures become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for records written to one sink
///
/// Every logger that writes to the same sink, including derived children,
/// shares one instance.
///
/// # Example
///
/// ```
/// use service_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written(42);
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.bytes_written(), 42);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records fully written to the sink
    records_written: AtomicU64,

    /// Bytes handed to the sink for written records
    bytes_written: AtomicU64,

    /// Records lost because the sink returned an error
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a successfully written record of `bytes` length
    #[inline]
    pub fn record_written(&self, bytes: usize) -> u64 {
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Get failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.records_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_written.store(0, Ordering::Relaxed);
        self.bytes_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_written: AtomicU64::new(self.records_written()),
            bytes_written: AtomicU64::new(self.bytes_written()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
