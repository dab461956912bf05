//! Error type for the analytics API client.
//!
//! # Design
//! Every failure path converges on one shape: a human-readable message and,
//! when the backend answered at all, the HTTP status. Callers that need to
//! branch on "not found" versus "server error" read the status; the message
//! is what gets shown to users.

use thiserror::Error;

/// Fallback message used when a non-2xx body carries no readable `detail`.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// The single error returned by every client operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status of the response, absent for transport failures.
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// The request never produced a response.
    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Network request failed: {cause}"), None)
    }

    /// The backend answered with a non-2xx status.
    pub fn http(status: u16, detail: Option<String>) -> Self {
        Self::new(
            detail.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            Some(status),
        )
    }

    pub fn invalid_body(status: u16, cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Invalid response body: {cause}"), Some(status))
    }

    pub fn serialization(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to serialize request body: {cause}"), None)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status, Some(500..=599))
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
