//! Connection-test and balance models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wallet balance reported by the connection test.
///
/// The backend sends the balance either as a JSON number or as a string
/// (exchanges report balances as decimal strings, and a missing figure is
/// reported as `"N/A"`). Numeric forms are kept as [`Decimal`] so the
/// display keeps the backend's precision; numbers outside the decimal range
/// and other JSON shapes are kept raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BalanceAmount {
    /// A parseable amount
    Amount(Decimal),
    /// A non-numeric string, shown verbatim
    Text(String),
    /// Any other JSON value
    Raw(serde_json::Value),
}

impl BalanceAmount {
    /// The numeric amount, if the backend sent one.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            BalanceAmount::Amount(d) => Some(*d),
            BalanceAmount::Text(_) | BalanceAmount::Raw(_) => None,
        }
    }
}

impl fmt::Display for BalanceAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceAmount::Amount(d) => write!(f, "{}", d),
            BalanceAmount::Text(s) => f.write_str(s),
            BalanceAmount::Raw(v) => write!(f, "{}", v),
        }
    }
}

/// Successful response of `GET /test-connection`.
///
/// A success status means the connection works whatever the body holds, so
/// every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionReport {
    /// Backend's own status label, e.g. "connected (MOCK MODE)"
    #[serde(default)]
    pub status: Option<String>,
    /// Total wallet balance in USDT
    #[serde(default)]
    pub balance: Option<BalanceAmount>,
}

impl ConnectionReport {
    /// Parse a connection-test body, falling back to an empty report.
    pub fn from_body(body: serde_json::Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }

    /// The balance for display, `"N/A"` when the backend sent none.
    pub fn balance_label(&self) -> String {
        self.balance
            .as_ref()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
