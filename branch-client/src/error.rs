//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level error, logged for diagnostics
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid header or URL built from configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error ({status}): {body}")]
    Internal { status: StatusCode, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Shown after a failed branch fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch branches. Please try again later.";

/// Shown after a failed branch update
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update branch. Please try again later.";

/// Error surfaced by the branch store
///
/// The message is fixed per operation; the underlying [`ClientError`] is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{}", FETCH_FAILED_MESSAGE)]
    FetchFailed,

    #[error("{}", UPDATE_FAILED_MESSAGE)]
    UpdateFailed,
}

impl StoreError {
    /// Human-readable message for the UI
    pub fn message(&self) -> &'static str {
        match self {
            StoreError::FetchFailed => FETCH_FAILED_MESSAGE,
            StoreError::UpdateFailed => UPDATE_FAILED_MESSAGE,
        }
    }
}
