//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Transport-level failures (connect errors, timeouts, body decode) surface as
/// [`ApiError::Request`]; a server that answered with a non-success HTTP status
/// surfaces as [`ApiError::Status`] carrying the status code and body text.
/// Nothing is retried or translated further.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a non-success status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}
