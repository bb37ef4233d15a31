//! Connection-test service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::ConnectionReport;
use crate::Result;

/// Service for the authenticated diagnostic call.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: order_desk::BackendClient) -> order_desk::Result<()> {
/// match client.connection().test().await {
///     Ok(report) => println!("Balance: {} USDT", report.balance_label()),
///     Err(err) => println!("Connection failed: {}", err.detail().unwrap_or("no response")),
/// }
/// # Ok(())
/// # }
/// ```
pub struct ConnectionService {
    inner: Arc<ClientInner>,
}

impl ConnectionService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Call `GET /test-connection`, which reads the futures wallet balance
    /// with the backend's exchange credentials.
    ///
    /// Any success status yields `Ok`; the body is parsed leniently.
    pub async fn test(&self) -> Result<ConnectionReport> {
        let body: Value = self.inner.get("/test-connection").await?;
        Ok(ConnectionReport::from_body(body))
    }
}
