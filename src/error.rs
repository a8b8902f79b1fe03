//! Custom error types for backup-dash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Why a daily report could not be obtained
///
/// Every variant is recovered locally by the report store: the selected day
/// shows an empty report and the load is flagged as failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportUnavailable {
    /// Connection failure, DNS failure or timeout
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not a JSON array of report entries
    #[error("malformed report: {0}")]
    Malformed(String),

    /// The body exceeded the configured size limit
    #[error("report exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// Reading a local report file failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl ReportUnavailable {
    /// Check if the report simply does not exist for that day
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

impl From<serde_json::Error> for ReportUnavailable {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// The main error type for backup-dash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (dates, formats)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Output errors (table, JSON, CSV)
    #[error("Output error: {0}")]
    Output(String),
}

impl DashError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        Self::Output(err.to_string())
    }
}

/// Result type alias for backup-dash operations
pub type DashResult<T> = Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_report() {
        assert!(ReportUnavailable::Status(404).is_missing());
        assert!(!ReportUnavailable::Status(500).is_missing());
        assert!(!ReportUnavailable::Network("refused".into()).is_missing());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: ReportUnavailable = json_err.into();
        assert!(matches!(err, ReportUnavailable::Malformed(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_err: DashError = io_err.into();
        assert!(matches!(dash_err, DashError::Io(_)));
    }
}
