//! Internal error types for studia-http.
//!
//! These cover construction only (client configuration and storage opening).
//! Request outcomes are never surfaced as errors; they are normalized into
//! [`Envelope`](crate::Envelope) values.

use thiserror::Error;

/// Result type alias for studia-http operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Internal error type for studia-http operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    /// Invalid client configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    /// Storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
