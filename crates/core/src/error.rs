//! Core error types for the lab site scripts.
//!
//! Missing page elements are never errors; these cover malformed page data
//! only, so a caller can decide which behavior to skip.

use thiserror::Error;

/// Core error type for ppl operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    // Validation errors
    #[error("invalid project record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("project record at index {index} ('{title}') has no 4-digit year in venue '{venue}'")]
    MissingYear {
        index: usize,
        title: String,
        venue: String,
    },

    #[error("invalid site configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid record error.
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Create a missing year error.
    pub fn missing_year(index: usize, title: impl Into<String>, venue: impl Into<String>) -> Self {
        Self::MissingYear {
            index,
            title: title.into(),
            venue: venue.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::json_parse_failed(err.to_string())
    }
}
