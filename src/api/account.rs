//! Account service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::Result;

/// Service for the raw futures account document.
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Call `GET /account`.
    ///
    /// The document is exchange-defined and returned untouched.
    pub async fn get(&self) -> Result<Value> {
        self.inner.get("/account").await
    }
}
