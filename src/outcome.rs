//! Terminal results of submissions and probes.
//!
//! These are the typed answers to "what happened"; how they are shown is
//! up to [`presenter`](crate::presenter).

use serde_json::Value;

use crate::models::{ConnectionReport, HealthReport, ValidationError};
use crate::Error;

/// Result of one submission attempt.
///
/// A desk holds at most one of these; starting a submission replaces the
/// previous one with [`Pending`](SubmissionOutcome::Pending).
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Submission started and has not resolved yet
    Pending,
    /// Backend accepted the order; holds its acknowledgement verbatim
    Success(Value),
    /// The draft never left the client
    ValidationError(String),
    /// No response was received
    NetworkError(String),
    /// Backend answered with a non-success status
    BackendError {
        /// HTTP status code
        status: u16,
        /// Human-readable detail
        message: String,
        /// Raw error body
        detail: Value,
    },
}

impl SubmissionOutcome {
    /// Classify a failed placement call.
    pub fn from_error(err: Error) -> Self {
        match err {
            Error::Api {
                status,
                detail,
                body,
            } => SubmissionOutcome::BackendError {
                status,
                message: detail,
                detail: body,
            },
            Error::Validation(v) => SubmissionOutcome::ValidationError(v.to_string()),
            other => SubmissionOutcome::NetworkError(other.to_string()),
        }
    }

    /// Returns `true` while the attempt has not resolved.
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionOutcome::Pending)
    }

    /// Returns `true` if the backend accepted the order.
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

impl From<ValidationError> for SubmissionOutcome {
    fn from(err: ValidationError) -> Self {
        SubmissionOutcome::ValidationError(err.to_string())
    }
}

/// Result of a startup probe or a connection test.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// Liveness check succeeded
    Healthy(HealthReport),
    /// Connection test succeeded
    Connected(ConnectionReport),
    /// Backend answered but refused, or answered with something unusable
    Rejected {
        /// HTTP status code, when the backend sent a non-success status
        status: Option<u16>,
        /// Human-readable detail
        detail: String,
    },
    /// No response was received
    Unreachable {
        /// Transport error description
        message: String,
    },
}

impl ProbeOutcome {
    /// Classify a failed probe call.
    pub fn from_error(err: Error) -> Self {
        if err.is_network_error() {
            return ProbeOutcome::Unreachable {
                message: err.to_string(),
            };
        }
        match err {
            Error::Api { status, detail, .. } => ProbeOutcome::Rejected {
                status: Some(status),
                detail,
            },
            Error::Http(_) | Error::UrlParse(_) | Error::Config(_) => ProbeOutcome::Unreachable {
                message: err.to_string(),
            },
            other => ProbeOutcome::Rejected {
                status: None,
                detail: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_keeps_body() {
        let body = serde_json::json!({"detail": "Margin is insufficient."});
        let outcome = SubmissionOutcome::from_error(Error::from_api_response(400, body.clone()));
        assert_eq!(
            outcome,
            SubmissionOutcome::BackendError {
                status: 400,
                message: "Margin is insufficient.".into(),
                detail: body,
            }
        );
    }

    #[test]
    fn test_timeout_is_network_error() {
        let outcome = SubmissionOutcome::from_error(Error::Timeout);
        assert_eq!(outcome, SubmissionOutcome::NetworkError("Request timeout".into()));
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_validation_outcome() {
        let outcome: SubmissionOutcome = ValidationError::MissingQuantity.into();
        assert_eq!(outcome, SubmissionOutcome::ValidationError("Quantity is required".into()));
    }

    #[test]
    fn test_connectivity_outcome_from_error() {
        let rejected = ProbeOutcome::from_error(Error::from_api_response(
            400,
            serde_json::json!({"detail": "bad key"}),
        ));
        assert_eq!(
            rejected,
            ProbeOutcome::Rejected {
                status: Some(400),
                detail: "bad key".into()
            }
        );

        assert!(matches!(
            ProbeOutcome::from_error(Error::Timeout),
            ProbeOutcome::Unreachable { .. }
        ));

        let malformed = serde_json::from_str::<Value>("{").unwrap_err();
        assert!(matches!(
            ProbeOutcome::from_error(Error::Json(malformed)),
            ProbeOutcome::Rejected { status: None, .. }
        ));
    }
}
