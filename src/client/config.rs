//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend address.
pub const ENV_API_URL: &str = "ORDER_DESK_API_URL";

/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "ORDER_DESK_TIMEOUT_SECS";

/// Configuration for the backend client.
///
/// Requests have no timeout unless one is set: a call that never resolves
/// keeps its in-flight flag raised.
///
/// # Example
///
/// ```
/// use order_desk::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://127.0.0.1:9000")
///     .unwrap()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("desk-cli/1.0");
/// assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL of the trading backend
    pub base_url: Url,
    /// Optional request timeout
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: None,
            user_agent: format!("order-desk/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `ORDER_DESK_API_URL` and
    /// `ORDER_DESK_TIMEOUT_SECS`, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            config = config.with_base_url(&url)?;
        }

        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            config = config.with_timeout(parse_timeout_secs(&secs)?);
        }

        Ok(config)
    }

    /// Set the backend root URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or cannot carry paths.
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let parsed = Url::parse(url)?;
        if parsed.cannot_be_a_base() {
            return Err(Error::Config(format!("'{}' cannot be used as a base URL", url)));
        }
        self.base_url = parsed;
        Ok(self)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve an endpoint path such as `/place-order` against the base URL.
    ///
    /// A base URL with a path prefix (`http://host/api/`) keeps its prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }
}

fn parse_timeout_secs(value: &str) -> Result<Duration> {
    let secs: u64 = value.trim().parse().map_err(|_| {
        Error::Config(format!(
            "{} must be a whole number of seconds, got '{}'",
            ENV_TIMEOUT_SECS, value
        ))
    })?;
    Ok(Duration::from_secs(secs))
}
