//! Liveness service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::HealthReport;
use crate::Result;

/// Service for the backend's unauthenticated liveness check.
pub struct HealthService {
    inner: Arc<ClientInner>,
}

impl HealthService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Call `GET /health`.
    ///
    /// Any success status yields `Ok`, whatever the body looks like.
    pub async fn check(&self) -> Result<HealthReport> {
        let body: Value = self.inner.get("/health").await?;
        Ok(HealthReport::from_body(body))
    }
}
