//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level name outside the known set
    #[error("invalid log level: {input}")]
    InvalidLevel { input: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("loud");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err: LoggerError = std::io::Error::other("disk full").into();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("loud");
        assert_eq!(err.to_string(), "invalid log level: loud");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open /var/log/app.log", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open"));
    }
}
