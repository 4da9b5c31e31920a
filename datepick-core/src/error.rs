//! Error types for datepick.

use thiserror::Error;

/// Errors that can occur at the edges of datepick: configuration, the
/// persisted form state, and user-supplied dates.
///
/// Selection itself never fails; a past day is ignored, not rejected.
#[derive(Error, Debug)]
pub enum DatePickError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Field '{field}' does not hold a list of dates")]
    FieldType { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DatePickError {
    fn from(e: serde_json::Error) -> Self {
        DatePickError::Serialization(e.to_string())
    }
}

/// Result type alias for datepick operations.
pub type DatePickResult<T> = Result<T, DatePickError>;
