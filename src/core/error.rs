//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`MountError`] - Failures locating the host element at startup

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Whether the server rejected the request for lack of a valid session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::HttpError(401 | 403))
    }
}

/// Errors raised while mounting the application into the host document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MountError {
    /// No document available (not running in a browser)
    #[error("Document not available")]
    NoDocument,
    /// The designated host element does not exist
    #[error("Failed to find #{0} element")]
    MissingElement(String),
}
