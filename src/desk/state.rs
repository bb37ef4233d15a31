//! The desk's state container and its transitions.
//!
//! Everything the operator can observe lives in [`DeskState`]. Transitions
//! are plain methods so they can be exercised without a backend.

use chrono::{DateTime, Utc};

use crate::models::{ConnectivityState, DraftEdit, OrderDraft};
use crate::outcome::{ProbeOutcome, SubmissionOutcome};
use crate::presenter::{Present, Presentation};

/// The latest presented result and when it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSurface {
    /// What to show
    pub presentation: Presentation,
    /// When the result resolved
    pub updated_at: DateTime<Utc>,
}

/// Session state for one operator.
#[derive(Debug, Clone, Default)]
pub struct DeskState {
    /// Order being edited
    pub draft: OrderDraft,
    /// Last known backend reachability
    pub connectivity: ConnectivityState,
    /// Latest submission outcome
    pub outcome: Option<SubmissionOutcome>,
    /// Latest probe outcome
    pub probe: Option<ProbeOutcome>,
    /// A submission has started and not resolved
    pub in_flight: bool,
    /// Latest result shown to the operator, from a submission or a probe
    pub result: Option<ResultSurface>,
    startup_probed: bool,
}

impl DeskState {
    /// Fresh session state with a default draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an edit to the draft.
    pub fn edit(&mut self, edit: DraftEdit) {
        self.draft.apply(edit);
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.draft.has_quantity()
    }

    /// Label for the submit action, e.g. "BUY BTCUSDT".
    pub fn submit_label(&self) -> String {
        if self.in_flight {
            "Placing Order...".to_string()
        } else {
            format!("{} {}", self.draft.side, self.draft.symbol)
        }
    }

    /// Returns `true` once the startup probe has been claimed.
    pub fn startup_probed(&self) -> bool {
        self.startup_probed
    }

    /// Claim the one startup probe of this session.
    ///
    /// Returns `false` if it was already claimed.
    pub(crate) fn claim_startup_probe(&mut self) -> bool {
        !std::mem::replace(&mut self.startup_probed, true)
    }

    /// Start a submission: raise in-flight, replace the outcome with
    /// `Pending` and clear the result surface.
    pub fn begin_submission(&mut self) {
        self.in_flight = true;
        self.outcome = Some(SubmissionOutcome::Pending);
        self.result = None;
    }

    /// Record a resolved submission. In-flight is lowered last.
    pub fn finish_submission(&mut self, outcome: SubmissionOutcome) {
        self.result = outcome.present().map(surface);
        self.outcome = Some(outcome);
        self.in_flight = false;
    }

    /// Record the startup probe: healthy, error or offline.
    ///
    /// The result surface is left alone; only connectivity changes.
    pub fn apply_startup_probe(&mut self, outcome: ProbeOutcome) {
        self.connectivity = match &outcome {
            ProbeOutcome::Healthy(_) | ProbeOutcome::Connected(_) => ConnectivityState::Healthy,
            ProbeOutcome::Rejected { .. } => ConnectivityState::Error,
            ProbeOutcome::Unreachable { .. } => ConnectivityState::Offline,
        };
        self.probe = Some(outcome);
    }

    /// Record a connection test: connected or error, plus a message on the
    /// result surface for every branch.
    pub fn apply_connection_test(&mut self, outcome: ProbeOutcome) {
        self.connectivity = match &outcome {
            ProbeOutcome::Healthy(_) | ProbeOutcome::Connected(_) => ConnectivityState::Connected,
            ProbeOutcome::Rejected { .. } | ProbeOutcome::Unreachable { .. } => {
                ConnectivityState::Error
            }
        };
        self.result = outcome.present().map(surface);
        self.probe = Some(outcome);
    }
}

fn surface(presentation: Presentation) -> ResultSurface {
    ResultSurface {
        presentation,
        updated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BalanceAmount, ConnectionReport, HealthReport, OrderSide};
    use crate::presenter::Classification;
    use rust_decimal_macros::dec;

    #[test]
    fn test_initial_state() {
        let state = DeskState::new();
        assert_eq!(state.connectivity, ConnectivityState::Unknown);
        assert!(!state.in_flight);
        assert!(state.outcome.is_none());
        assert!(state.result.is_none());
        assert!(state.can_submit());
        assert_eq!(state.submit_label(), "BUY BTCUSDT");
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = DeskState::new();
        state.finish_submission(SubmissionOutcome::NetworkError("old".into()));
        assert!(state.result.is_some());

        state.begin_submission();
        assert!(state.in_flight);
        assert!(!state.can_submit());
        assert_eq!(state.submit_label(), "Placing Order...");
        assert_eq!(state.outcome, Some(SubmissionOutcome::Pending));
        assert!(state.result.is_none());

        state.finish_submission(SubmissionOutcome::ValidationError("Quantity is required".into()));
        assert!(!state.in_flight);
        let shown = state.result.as_ref().unwrap();
        assert_eq!(shown.presentation.classification, Classification::ValidationError);
    }

    #[test]
    fn test_startup_health_mapping() {
        let mut state = DeskState::new();
        state.apply_startup_probe(ProbeOutcome::Healthy(HealthReport::default()));
        assert_eq!(state.connectivity, ConnectivityState::Healthy);
        assert!(state.result.is_none());

        state.apply_startup_probe(ProbeOutcome::Rejected {
            status: Some(500),
            detail: "Internal Server Error".into(),
        });
        assert_eq!(state.connectivity, ConnectivityState::Error);

        state.apply_startup_probe(ProbeOutcome::Unreachable {
            message: "connection refused".into(),
        });
        assert_eq!(state.connectivity, ConnectivityState::Offline);
    }

    #[test]
    fn test_connection_test_mapping() {
        let mut state = DeskState::new();
        state.apply_connection_test(ProbeOutcome::Connected(ConnectionReport {
            status: None,
            balance: Some(BalanceAmount::Amount(dec!(1000))),
        }));
        assert_eq!(state.connectivity, ConnectivityState::Connected);
        assert!(state.result.as_ref().unwrap().presentation.message.contains("1000"));

        state.apply_connection_test(ProbeOutcome::Unreachable {
            message: "dns error".into(),
        });
        assert_eq!(state.connectivity, ConnectivityState::Error);
        let shown = &state.result.as_ref().unwrap().presentation;
        assert_eq!(shown.classification, Classification::NetworkError);
        assert!(shown.message.contains("dns error"));
    }

    #[test]
    fn test_startup_check_claimed_once() {
        let mut state = DeskState::new();
        assert!(state.claim_startup_probe());
        assert!(!state.claim_startup_probe());
        assert!(state.startup_probed());
    }

    #[test]
    fn test_empty_quantity_disables_submit() {
        let mut state = DeskState::new();
        state.edit(DraftEdit::Side(OrderSide::Sell));
        assert_eq!(state.submit_label(), "SELL BTCUSDT");
        state.edit(DraftEdit::Quantity(String::new()));
        assert!(!state.can_submit());
    }
}
