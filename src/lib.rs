//! # order-desk
//!
//! Order entry for a crypto futures trading backend.
//!
//! The crate covers the client side of a small trading front end: an
//! editable order draft, client-side validation, a single-attempt order
//! submission, backend connectivity probes, and classification of every
//! outcome for display. Order execution, exchange credentials and balance
//! accounting live in the backend.
//!
//! ## Features
//!
//! - **Drafts**: symbol, side, market/limit type, quantity and price as typed
//! - **Validation**: pure, deterministic; invalid drafts never reach the network
//! - **Connectivity**: startup liveness probe and on-demand connection test
//! - **Submission**: one `POST /place-order` per attempt with an in-flight flag
//! - **Presentation**: success / validation / network / backend classification
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use order_desk::{BackendClient, ClientConfig, OrderDesk};
//! use order_desk::models::{DraftEdit, OrderSide, OrderType};
//! use order_desk::presenter::Present;
//!
//! #[tokio::main]
//! async fn main() -> order_desk::Result<()> {
//!     let client = BackendClient::new(ClientConfig::from_env()?)?;
//!     let desk = OrderDesk::open(client).await;
//!     println!("Backend: {}", desk.connectivity().await);
//!
//!     desk.edit(DraftEdit::Side(OrderSide::Sell)).await;
//!     desk.edit(DraftEdit::OrderType(OrderType::Limit)).await;
//!     desk.edit(DraftEdit::Price("65000".into())).await;
//!
//!     let outcome = desk.submit().await;
//!     if let Some(shown) = outcome.present() {
//!         println!("[{:?}] {}", shown.tone(), shown.message);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod desk;
pub mod error;
pub mod models;
pub mod outcome;
pub mod presenter;

// Re-export primary types at crate root for convenience
pub use client::{BackendClient, ClientConfig};
pub use desk::{DeskEvent, DeskState, OrderDesk};
pub use error::{Error, Result};
pub use models::{ConnectivityState, Symbol};
pub use outcome::{ProbeOutcome, SubmissionOutcome};

/// Prelude module for convenient imports.
///
/// ```rust
/// use order_desk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{BackendClient, ClientConfig};
    pub use crate::desk::{DeskEvent, DeskState, OrderDesk, ResultSurface};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        BalanceAmount, ConnectionReport, ConnectivityState, DraftEdit, HealthReport,
        NormalizedOrder, OrderDraft, OrderSide, OrderType, Symbol, ValidationError,
    };
    pub use crate::outcome::{ProbeOutcome, SubmissionOutcome};
    pub use crate::presenter::{present, Classification, Present, Presentation, Tone};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_creation() {
        let symbol = Symbol::new("btcusdt");
        assert_eq!(symbol.as_str(), "BTCUSDT");
    }

    #[test]
    fn test_default_connectivity() {
        assert_eq!(DeskState::new().connectivity, ConnectivityState::Unknown);
    }

    #[test]
    fn test_validation_error_converts() {
        let err: Error = models::ValidationError::MissingPrice.into();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid order: Price is required for LIMIT orders");
    }
}
