//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink rejected a log line
    #[error("Failed to write log line: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Wrap a sink failure
    pub fn write(source: std::io::Error) -> Self {
        LoggerError::Write { source }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("format", "unknown profile");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::write(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert!(matches!(err, LoggerError::Write { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("level", "Invalid log level: 'loud'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for level: Invalid log level: 'loud'"
        );

        let err: LoggerError = serde_json::from_str::<u8>("\"x\"").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::write(io_err);

        assert!(err.to_string().contains("access denied"));
        assert!(err.source().is_some());
    }
}
