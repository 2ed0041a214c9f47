//! # Common Error Types
//!
//! Consolidated error handling for the dashboard application.
//!
//! This module provides a centralized error type [`ApiError`] covering every
//! failure mode of backend communication.
//!
//! ## Error Categories
//!
//! - **Transport**: the request never produced an HTTP response (connection
//!   refused, timeout, DNS failure)
//! - **Http**: the backend answered with a non-success status; carries the
//!   status code and the message extracted from the error body
//! - **Decode**: the response body could not be parsed as the expected JSON
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use dashboard::core::error::ApiError;
//!
//! fn describe(err: &ApiError) -> String {
//!     match err {
//!         ApiError::Http { status, message } => format!("{status}: {message}"),
//!         other => other.to_string(),
//!     }
//! }
//! ```

use thiserror::Error;

/// Application-wide error type for backend communication.
///
/// Variants carry `String` payloads rather than source errors so that results
/// can be cloned into UI events and stored in form state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the backend or timed out.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status code.
    ///
    /// `message` is taken from the error body when one is present, otherwise
    /// the canonical reason phrase for the status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error means the session is missing or no longer valid.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_backend_message() {
        let err = ApiError::Http {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn auth_failure_detection() {
        let unauthorized = ApiError::Http {
            status: 401,
            message: "Not authenticated".to_string(),
        };
        let forbidden = ApiError::Http {
            status: 403,
            message: "Admins only".to_string(),
        };
        let server = ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(unauthorized.is_auth_failure());
        assert!(forbidden.is_auth_failure());
        assert!(!server.is_auth_failure());
        assert!(!ApiError::Transport("timeout".to_string()).is_auth_failure());
    }
}
