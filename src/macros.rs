//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The message is
//! only formatted when the record passes the logger's level filter.
//!
//! # Examples
//!
//! ```
//! use service_logger::prelude::*;
//! use service_logger::info;
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::builder().output(buffer.sink()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert_eq!(buffer.lines().len(), 2);
//! ```

/// Log a message at the given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new().sink()).build();
/// use service_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.at($level).message(format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder().level(Level::Trace).output(MemorySink::new().sink()).build();
/// use service_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new().sink()).build();
/// use service_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then run the logger's termination hook.
///
/// With the default hook this ends the process with exit code 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger, MemorySink, TerminationAction, TerminationHook};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn logger_at(level: Level) -> (Logger, MemorySink) {
        let buffer = MemorySink::new();
        let logger = Logger::builder()
            .level(level)
            .output(buffer.sink())
            .build();
        (logger, buffer)
    }

    fn messages(buffer: &MemorySink) -> Vec<String> {
        buffer
            .lines()
            .iter()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["message"].as_str().unwrap().to_string()
            })
            .collect()
    }

    #[test]
    fn test_log_macro() {
        let (logger, buffer) = logger_at(Level::Info);
        log!(logger, Level::Info, "Test message");
        log!(logger, Level::Info, "Formatted: {}", 42);

        assert_eq!(messages(&buffer), vec!["Test message", "Formatted: 42"]);
    }

    #[test]
    fn test_trace_macro_respects_filter() {
        let (logger, buffer) = logger_at(Level::Debug);
        trace!(logger, "Trace message");
        assert!(buffer.is_empty());

        logger.set_level(Level::Trace);
        trace!(logger, "Value: {}", 10);
        assert_eq!(messages(&buffer), vec!["Value: 10"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = logger_at(Level::Trace);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        let levels: Vec<String> = buffer
            .lines()
            .iter()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["level"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(levels, vec!["debug", "info", "warn", "error"]);
    }

    #[test]
    fn test_macro_records_call_site() {
        let (logger, buffer) = logger_at(Level::Info);
        info!(logger, "where");

        let value: serde_json::Value = serde_json::from_str(&buffer.lines()[0]).unwrap();
        assert!(value["caller"].as_str().unwrap().contains("macros.rs"));
    }

    #[test]
    fn test_fatal_macro() {
        let buffer = MemorySink::new();
        let actions = Arc::new(Mutex::new(Vec::new()));
        let hook_actions = Arc::clone(&actions);
        let hook: TerminationHook =
            Arc::new(move |action: TerminationAction| hook_actions.lock().push(action));
        let logger = Logger::builder()
            .output(buffer.sink())
            .on_terminate(hook)
            .build();

        fatal!(logger, "Critical failure: {}", "system");

        assert_eq!(messages(&buffer), vec!["Critical failure: system"]);
        assert_eq!(*actions.lock(), vec![TerminationAction::Exit { code: 1 }]);
    }
}
