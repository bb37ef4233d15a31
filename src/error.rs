//! Error types for the order desk.
//!
//! [`Error`] covers every failure mode of a backend call. Local draft
//! problems are reported separately as [`ValidationError`], which never
//! leaves the client.

use serde_json::Value;
use thiserror::Error;

use crate::models::order::ValidationError;

/// A specialized `Result` type for order desk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all backend operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status
    #[error("API error: status={status}, detail={detail}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable detail extracted from the body
        detail: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// The draft failed client-side validation
    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationError),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if no response was received from the backend
    /// (connection refused, DNS failure, timeout, broken transport).
    ///
    /// Once a status line has arrived the failure is an [`Error::Api`],
    /// even if the body could not be read.
    ///
    /// # Example
    ///
    /// ```
    /// use order_desk::Error;
    ///
    /// assert!(Error::Timeout.is_network_error());
    /// assert!(!Error::Config("bad".into()).is_network_error());
    /// ```
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::Timeout => true,
            Error::Http(err) => err.status().is_none(),
            _ => false,
        }
    }

    /// Returns `true` if the backend rejected the request with a 4xx status,
    /// or the input never made it to the backend.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Validation(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the backend failed with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The backend's detail message, when a response was received.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Create an API error for a response whose body could not be read.
    pub(crate) fn unreadable_body(status: u16, reason: impl std::fmt::Display) -> Self {
        Error::Api {
            status,
            detail: format!("Failed to read response body: {}", reason),
            body: Value::Null,
        }
    }

    /// Create an API error from a non-success response.
    ///
    /// The backend reports failures as `{"detail": ...}`. A string detail
    /// is used verbatim; structured details (validation error lists) are
    /// rendered as compact JSON. Without a detail the HTTP reason phrase
    /// stands in.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let detail = match body.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown API error")
                .to_string(),
            Some(other) => other.to_string(),
        };

        Error::Api {
            status,
            detail,
            body,
        }
    }
}
