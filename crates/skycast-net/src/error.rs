//! Internal error types for HTTP operations.
//!
//! These errors are mapped to core port errors at the boundary (`port.rs`).

use thiserror::Error;

/// Result type alias for network operations.
pub type NetResult<T> = Result<T, NetError>;

/// Errors raised by the HTTP layer.
#[derive(Debug, Error)]
pub enum NetError {
    /// API request failed with an HTTP error status.
    #[error("API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl NetError {
    /// HTTP status of a failed request, if there was one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
