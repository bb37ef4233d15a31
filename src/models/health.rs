//! Liveness check model.

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
///
/// Only the status code matters to the startup probe; the body is parsed
/// leniently and every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Backend status label, normally "healthy"
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the backend managed to build its exchange client
    #[serde(default)]
    pub bot_initialized: Option<bool>,
}

impl HealthReport {
    /// Parse a health body, falling back to an empty report.
    pub fn from_body(body: serde_json::Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }
}
