//! HTTP client and service layer for the trading backend.
//!
//! [`BackendClient`] is the transport used by the desk. It can also be
//! used directly:
//!
//! ```no_run
//! use order_desk::{BackendClient, ClientConfig};
//!
//! # async fn example() -> order_desk::Result<()> {
//! let client = BackendClient::new(ClientConfig::default())?;
//! let health = client.health().check().await?;
//! println!("bot initialized: {:?}", health.bot_initialized);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL, ENV_API_URL, ENV_TIMEOUT_SECS};
pub use http::BackendClient;
pub(crate) use http::ClientInner;
