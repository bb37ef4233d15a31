//! The order desk: draft editing, connectivity probes and submission.
//!
//! [`OrderDesk`] is a cheap, cloneable handle over one operator session.
//! Probes and submissions are independent async operations against the
//! same [`DeskState`]; whichever resolves last determines what is shown.
//! No lock is held across a network call.
//!
//! Observers that redraw on change can [`subscribe`](OrderDesk::subscribe)
//! to a stream of [`DeskEvent`]s instead of polling.
//!
//! # Example
//!
//! ```no_run
//! use order_desk::{BackendClient, ClientConfig, OrderDesk};
//! use order_desk::models::DraftEdit;
//!
//! # async fn example() -> order_desk::Result<()> {
//! let desk = OrderDesk::open(BackendClient::new(ClientConfig::default())?).await;
//! println!("backend is {}", desk.connectivity().await);
//!
//! desk.edit(DraftEdit::Quantity("0.002".into())).await;
//! let outcome = desk.submit().await;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

mod state;

pub use state::{DeskState, ResultSurface};

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::client::BackendClient;
use crate::models::{ConnectivityState, DraftEdit, OrderDraft};
use crate::outcome::{ProbeOutcome, SubmissionOutcome};

const EVENT_CAPACITY: usize = 64;

/// A change to the session state that an observer may want to redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum DeskEvent {
    /// The in-flight flag was raised or lowered
    InFlightChanged(bool),
    /// A probe or connection test resolved with this connectivity
    ConnectivityChanged(ConnectivityState),
    /// A submission resolved; sent before in-flight is lowered
    SubmissionResolved(SubmissionOutcome),
}

/// One operator session against the trading backend.
#[derive(Clone)]
pub struct OrderDesk {
    client: BackendClient,
    state: Arc<RwLock<DeskState>>,
    events: broadcast::Sender<DeskEvent>,
}

impl OrderDesk {
    /// Create a desk without probing the backend.
    ///
    /// Connectivity stays `Unknown` until [`startup_probe`](Self::startup_probe)
    /// runs. Most callers want [`open`](Self::open).
    pub fn new(client: BackendClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            client,
            state: Arc::new(RwLock::new(DeskState::new())),
            events,
        }
    }

    /// Create a desk and run its startup probe before returning.
    pub async fn open(client: BackendClient) -> Self {
        let desk = Self::new(client);
        desk.startup_probe().await;
        desk
    }

    /// Subscribe to state changes made after this call.
    ///
    /// Events are sent while the state lock is held, so they arrive in the
    /// order the changes were made. A receiver that falls behind by more
    /// than 64 events sees `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<DeskEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: DeskEvent) {
        // no receivers is fine
        let _ = self.events.send(event);
    }

    /// The underlying backend client.
    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Run the session's liveness probe against `GET /health`.
    ///
    /// Runs at most once per desk; later calls return `None` without
    /// touching the network. Otherwise returns the new connectivity:
    /// healthy on a success status, error on any other status, offline
    /// when no response arrives.
    pub async fn startup_probe(&self) -> Option<ConnectivityState> {
        if !self.state.write().await.claim_startup_probe() {
            tracing::debug!("startup probe already ran; skipping");
            return None;
        }

        let outcome = match self.client.health().check().await {
            Ok(report) => ProbeOutcome::Healthy(report),
            Err(err) => ProbeOutcome::from_error(err),
        };

        let mut state = self.state.write().await;
        state.apply_startup_probe(outcome);
        tracing::info!(connectivity = %state.connectivity, "startup probe resolved");
        self.emit(DeskEvent::ConnectivityChanged(state.connectivity));
        Some(state.connectivity)
    }

    /// Run the deep connection test against `GET /test-connection`.
    ///
    /// Updates both the connectivity state and the result surface.
    /// Overlapping calls are not de-duplicated; the last to resolve wins.
    pub async fn test_connection(&self) -> ProbeOutcome {
        let outcome = match self.client.connection().test().await {
            Ok(report) => ProbeOutcome::Connected(report),
            Err(err) => ProbeOutcome::from_error(err),
        };

        let mut state = self.state.write().await;
        state.apply_connection_test(outcome.clone());
        tracing::info!(connectivity = %state.connectivity, "connection test resolved");
        self.emit(DeskEvent::ConnectivityChanged(state.connectivity));
        outcome
    }

    /// Apply an edit to the session's draft.
    pub async fn edit(&self, edit: DraftEdit) {
        self.state.write().await.edit(edit);
    }

    /// Submit the session's current draft. See [`submit_draft`](Self::submit_draft).
    pub async fn submit(&self) -> SubmissionOutcome {
        let draft = self.state.read().await.draft.clone();
        self.submit_draft(&draft).await
    }

    /// Submit a draft: validate, send, interpret.
    ///
    /// In-flight is raised before validation and lowered after the outcome
    /// is recorded, on every path. An invalid draft makes no network call;
    /// a valid one makes exactly one. Nothing is retried, and concurrent
    /// calls do not coordinate with each other.
    pub async fn submit_draft(&self, draft: &OrderDraft) -> SubmissionOutcome {
        {
            let mut state = self.state.write().await;
            state.begin_submission();
            self.emit(DeskEvent::InFlightChanged(true));
        }
        self.resolve_submission(draft).await
    }

    /// Submit the current draft unless the submit action is disabled.
    ///
    /// Returns `None` without doing anything while another submission is in
    /// flight or the quantity field is empty. The check and the start of the
    /// submission happen under one lock.
    pub async fn try_submit(&self) -> Option<SubmissionOutcome> {
        let draft = {
            let mut state = self.state.write().await;
            if !state.can_submit() {
                tracing::debug!(in_flight = state.in_flight, "submit ignored");
                return None;
            }
            state.begin_submission();
            self.emit(DeskEvent::InFlightChanged(true));
            state.draft.clone()
        };
        Some(self.resolve_submission(&draft).await)
    }

    async fn resolve_submission(&self, draft: &OrderDraft) -> SubmissionOutcome {
        let outcome = self.attempt(draft).await;
        let mut state = self.state.write().await;
        state.finish_submission(outcome.clone());
        self.emit(DeskEvent::SubmissionResolved(outcome.clone()));
        self.emit(DeskEvent::InFlightChanged(false));
        outcome
    }

    async fn attempt(&self, draft: &OrderDraft) -> SubmissionOutcome {
        let order = match draft.validate() {
            Ok(order) => order,
            Err(err) => {
                tracing::info!(error = %err, "draft rejected before sending");
                return err.into();
            }
        };

        match self.client.orders().place(&order).await {
            Ok(ack) => {
                tracing::info!(symbol = %order.symbol, "order acknowledged");
                SubmissionOutcome::Success(ack)
            }
            Err(err) => {
                tracing::warn!(symbol = %order.symbol, error = %err, "order failed");
                SubmissionOutcome::from_error(err)
            }
        }
    }

    /// A copy of the whole session state.
    pub async fn snapshot(&self) -> DeskState {
        self.state.read().await.clone()
    }

    /// Current connectivity.
    pub async fn connectivity(&self) -> ConnectivityState {
        self.state.read().await.connectivity
    }

    /// Returns `true` while a submission is unresolved.
    pub async fn is_in_flight(&self) -> bool {
        self.state.read().await.in_flight
    }

    /// A copy of the current draft.
    pub async fn draft(&self) -> OrderDraft {
        self.state.read().await.draft.clone()
    }

    /// The latest submission outcome.
    pub async fn outcome(&self) -> Option<SubmissionOutcome> {
        self.state.read().await.outcome.clone()
    }

    /// The latest result shown to the operator.
    pub async fn result(&self) -> Option<ResultSurface> {
        self.state.read().await.result.clone()
    }

    /// Whether the submit action is currently enabled.
    pub async fn can_submit(&self) -> bool {
        self.state.read().await.can_submit()
    }

    /// Label for the submit action.
    pub async fn submit_label(&self) -> String {
        self.state.read().await.submit_label()
    }
}

impl std::fmt::Debug for OrderDesk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderDesk")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
