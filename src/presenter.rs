//! Mapping of outcomes to what the operator sees.
//!
//! Pure and stateless. The classification only drives emphasis
//! (positive or negative styling); the message is what gets shown.

use serde::Serialize;

use crate::outcome::{ProbeOutcome, SubmissionOutcome};

/// What kind of result is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// The attempt succeeded
    Success,
    /// The draft was rejected locally
    ValidationError,
    /// No response from the backend
    NetworkError,
    /// The backend answered with a failure
    BackendError,
}

/// Display emphasis for a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Success styling
    Positive,
    /// Failure styling
    Negative,
}

impl Classification {
    /// Styling emphasis for this classification.
    pub fn tone(&self) -> Tone {
        match self {
            Classification::Success => Tone::Positive,
            Classification::ValidationError
            | Classification::NetworkError
            | Classification::BackendError => Tone::Negative,
        }
    }
}

/// A classified, human-readable result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Result kind
    pub classification: Classification,
    /// Text to show
    pub message: String,
}

impl Presentation {
    fn new(classification: Classification, message: impl Into<String>) -> Self {
        Self {
            classification,
            message: message.into(),
        }
    }

    /// Styling emphasis.
    pub fn tone(&self) -> Tone {
        self.classification.tone()
    }
}

/// Anything that can be shown on the result surface.
pub trait Present {
    /// Classify and describe this outcome; `None` while nothing is resolved.
    fn present(&self) -> Option<Presentation>;
}

impl Present for SubmissionOutcome {
    fn present(&self) -> Option<Presentation> {
        let presentation = match self {
            SubmissionOutcome::Pending => return None,
            SubmissionOutcome::Success(payload) => Presentation::new(
                Classification::Success,
                serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
            ),
            SubmissionOutcome::ValidationError(message) => Presentation::new(
                Classification::ValidationError,
                format!("Validation error: {}", message),
            ),
            SubmissionOutcome::NetworkError(message) => Presentation::new(
                Classification::NetworkError,
                format!("Network Error: {}", message),
            ),
            SubmissionOutcome::BackendError { message, .. } => {
                Presentation::new(Classification::BackendError, format!("Error: {}", message))
            }
        };
        Some(presentation)
    }
}

impl Present for ProbeOutcome {
    fn present(&self) -> Option<Presentation> {
        let presentation = match self {
            ProbeOutcome::Healthy(report) => Presentation::new(
                Classification::Success,
                format!(
                    "Backend {}",
                    report.status.as_deref().unwrap_or("healthy")
                ),
            ),
            ProbeOutcome::Connected(report) => Presentation::new(
                Classification::Success,
                format!("Connected! Balance: {} USDT", report.balance_label()),
            ),
            ProbeOutcome::Rejected { detail, .. } => Presentation::new(
                Classification::BackendError,
                format!("Connection failed: {}", detail),
            ),
            ProbeOutcome::Unreachable { message } => Presentation::new(
                Classification::NetworkError,
                format!("Network error: {}", message),
            ),
        };
        Some(presentation)
    }
}

/// Present any outcome. Shorthand for [`Present::present`].
pub fn present(outcome: &impl Present) -> Option<Presentation> {
    outcome.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BalanceAmount, ConnectionReport, HealthReport};
    use rust_decimal_macros::dec;

    #[test]
    fn test_tones() {
        assert_eq!(Classification::Success.tone(), Tone::Positive);
        assert_eq!(Classification::ValidationError.tone(), Tone::Negative);
        assert_eq!(Classification::NetworkError.tone(), Tone::Negative);
        assert_eq!(Classification::BackendError.tone(), Tone::Negative);
    }

    #[test]
    fn test_pending_has_no_presentation() {
        assert_eq!(present(&SubmissionOutcome::Pending), None);
    }

    #[test]
    fn test_success_echoes_payload() {
        let ack = serde_json::json!({"orderId": 4242, "status": "FILLED"});
        let shown = present(&SubmissionOutcome::Success(ack)).unwrap();
        assert_eq!(shown.tone(), Tone::Positive);
        assert!(shown.message.contains("\"orderId\": 4242"));
        assert!(shown.message.contains("FILLED"));
    }

    #[test]
    fn test_submission_failures() {
        let shown = present(&SubmissionOutcome::BackendError {
            status: 400,
            message: "Invalid symbol.".into(),
            detail: serde_json::json!({"detail": "Invalid symbol."}),
        })
        .unwrap();
        assert_eq!(shown.classification, Classification::BackendError);
        assert_eq!(shown.message, "Error: Invalid symbol.");

        let shown = present(&SubmissionOutcome::NetworkError("connection refused".into())).unwrap();
        assert_eq!(shown.classification, Classification::NetworkError);
        assert!(shown.message.contains("connection refused"));

        let outcome = SubmissionOutcome::ValidationError("Quantity is required".into());
        let shown = present(&outcome).unwrap();
        assert_eq!(shown.classification, Classification::ValidationError);
        assert_eq!(shown.tone(), Tone::Negative);
    }

    #[test]
    fn test_connectivity_messages() {
        let connected = ProbeOutcome::Connected(ConnectionReport {
            status: Some("connected".into()),
            balance: Some(BalanceAmount::Amount(dec!(1000))),
        });
        assert_eq!(
            present(&connected).unwrap().message,
            "Connected! Balance: 1000 USDT"
        );

        let rejected = ProbeOutcome::Rejected {
            status: Some(400),
            detail: "bad key".into(),
        };
        let shown = present(&rejected).unwrap();
        assert_eq!(shown.message, "Connection failed: bad key");
        assert_eq!(shown.tone(), Tone::Negative);

        let healthy = ProbeOutcome::Healthy(HealthReport::default());
        assert_eq!(present(&healthy).unwrap().message, "Backend healthy");
    }
}
