//! Error types for the portfolify libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, API, decoding, input validation, and credential storage
//! failures. Messages are already shaped for display: user interfaces
//! show `Display` output verbatim.

use std::fmt;
use thiserror::Error;

/// The unified error type for portfolify operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, connection refused, TLS, timeout).
    ///
    /// Deliberately a single fixed message: the distinction between
    /// transport failure modes is not actionable for the user, who only
    /// needs to know the backend could not be reached.
    #[error("Unable to connect to the server. Please ensure the backend is running.")]
    Unreachable,

    /// A non-2xx response from the API, carrying the server-reported message.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A 2xx response whose body could not be deserialized.
    #[error("unexpected response from server: {message}")]
    Decode { message: String },

    /// Input validation errors (invalid base URL, malformed identifier).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Credential storage errors (filesystem I/O, missing data directory).
    #[error("credential storage error: {message}")]
    Storage { message: String },
}

impl Error {
    /// Create a decode error from any displayable cause.
    pub fn decode(cause: impl fmt::Display) -> Self {
        Error::Decode {
            message: cause.to_string(),
        }
    }

    /// Create a storage error from any displayable cause.
    pub fn storage(cause: impl fmt::Display) -> Self {
        Error::Storage {
            message: cause.to_string(),
        }
    }
}

/// An error reported by the API in a non-2xx response.
///
/// The message is normalized at the HTTP layer: the backend's string
/// `detail` verbatim, validation messages joined with `", "`, or
/// `Request failed (<status>)` when the body had no usable detail.
/// `Display` shows the message alone so it can be surfaced to users
/// unchanged.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Normalized, display-ready message.
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Check if this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid resource identifier.
    #[error("invalid id '{value}': {reason}")]
    Id { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_message_only() {
        let err = Error::from(ApiError::new(401, "Invalid credentials"));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn unreachable_has_fixed_message() {
        assert_eq!(
            Error::Unreachable.to_string(),
            "Unable to connect to the server. Please ensure the backend is running."
        );
    }

    #[test]
    fn api_error_exposes_status() {
        let err = ApiError::new(422, "field required");
        assert_eq!(err.status, 422);
        assert!(!err.is_auth_error());
        assert!(ApiError::new(401, "nope").is_auth_error());
    }
}
