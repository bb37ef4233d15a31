//! HTTP client implementation for the trading backend.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{AccountService, ConnectionService, HealthService, OrdersService};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The client for the trading backend's REST endpoints.
///
/// Each endpoint group is exposed as a small service struct. Every call is
/// a single attempt; nothing is retried.
///
/// # Example
///
/// ```no_run
/// use order_desk::{BackendClient, ClientConfig};
/// use order_desk::models::{OrderDraft, OrderSide};
///
/// # async fn example() -> order_desk::Result<()> {
/// let client = BackendClient::new(ClientConfig::default())?;
///
/// let report = client.connection().test().await?;
/// println!("Balance: {}", report.balance_label());
///
/// let order = OrderDraft::market("BTCUSDT", OrderSide::Buy, "0.001").validate()?;
/// let ack = client.orders().place(&order).await?;
/// println!("{}", ack);
/// # Ok(())
/// # }
/// ```
pub struct BackendClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl BackendClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
        })
    }

    /// Create a client from `ORDER_DESK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the liveness service.
    pub fn health(&self) -> HealthService {
        HealthService::new(self.inner.clone())
    }

    /// Get the connection-test service.
    pub fn connection(&self) -> ConnectionService {
        ConnectionService::new(self.inner.clone())
    }

    /// Get the order placement service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.config.endpoint(path)?;
        Ok(self
            .http
            .request(method, url)
            .headers(self.build_headers()))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::GET, path)?;
        self.execute(Method::GET, path, request).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(Method::POST, path)?.json(body);
        self.execute(Method::POST, path, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        tracing::debug!(%method, path, "sending request");

        let response = request.send().await.map_err(|err| {
            tracing::warn!(%method, path, error = %err, "request failed without a response");
            if err.is_timeout() {
                Error::Timeout
            } else {
                Error::Http(err)
            }
        })?;

        tracing::debug!(%method, path, status = response.status().as_u16(), "response received");
        self.handle_response(response).await
    }

    /// Handle a backend response.
    ///
    /// Success bodies may be empty (read as `null`) or non-JSON (read as a
    /// JSON string holding the raw text). A body that cannot be read after
    /// the status arrived is reported as an API error with that status.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::unreadable_body(status.as_u16(), err))?;
        let body = parse_body(&bytes);

        if status.is_success() {
            return Ok(serde_json::from_value(body)?);
        }

        let err = Error::from_api_response(status.as_u16(), body);
        let code = status.as_u16();
        if err.is_server_error() {
            tracing::error!(status = code, detail = err.detail(), "backend failed");
        } else {
            tracing::warn!(status = code, detail = err.detail(), "backend rejected request");
        }
        Err(err)
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

impl Clone for BackendClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b""), Value::Null);
        assert_eq!(parse_body(b"  \n"), Value::Null);
        assert_eq!(parse_body(br#"{"detail":"x"}"#), serde_json::json!({"detail": "x"}));
        assert_eq!(
            parse_body(b"Internal Server Error"),
            Value::String("Internal Server Error".into())
        );
    }

    #[test]
    fn test_client_exposes_config() {
        let client = BackendClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.config().base_url.as_str(), "http://localhost:8000/");
        let debug = format!("{:?}", client);
        assert!(debug.contains("BackendClient"));
    }
}
