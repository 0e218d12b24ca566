//! Network-related errors surfaced by the repository facade.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fetching from the remote API.
///
/// The facade surfaces these unchanged; it never retries internally.
/// Retry policy, if any, belongs to the embedding application.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum NetworkError {
    /// Failed to reach the API (DNS, TLS, connection refused, etc)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// API returned 429 Too Many Requests
    #[error("Rate limited (429): retry after {retry_after:?}s")]
    RateLimited {
        /// Seconds to wait before retrying, if provided by the server
        retry_after: Option<u64>,
    },

    /// API returned a non-success status
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Response body was not the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
}

impl NetworkError {
    /// Check if this is a temporary error that may resolve on retry.
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::RateLimited { .. } | Self::Timeout
        ) || matches!(self, Self::Server { status, .. } if *status >= 500)
    }
}
