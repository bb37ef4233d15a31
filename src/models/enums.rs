//! Enumeration types shared by the draft, the wire format and the desk.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Open or add to a long position
    #[default]
    Buy,
    /// Open or add to a short position
    Sell,
}

impl OrderSide {
    /// Wire representation ("BUY" / "SELL").
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }

    /// Returns `true` if this is a buy.
    pub fn is_buy(&self) -> bool {
        matches!(self, OrderSide::Buy)
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type specifying how the order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute immediately at current market price
    #[default]
    Market,
    /// Limit order - execute at specified price or better
    Limit,
}

impl OrderType {
    /// Wire representation ("MARKET" / "LIMIT").
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }

    /// Returns `true` if orders of this type carry a limit price.
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reachability of the trading backend as last observed by a probe.
///
/// Starts as [`Unknown`](ConnectivityState::Unknown) and only changes when a
/// probe resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityState {
    /// No probe has resolved yet
    #[default]
    Unknown,
    /// Liveness check answered with a success status
    Healthy,
    /// Authenticated diagnostic call succeeded
    Connected,
    /// Backend answered but rejected the probe, or the deep probe failed
    Error,
    /// No response from the backend at all
    Offline,
}

impl ConnectivityState {
    /// Lowercase label used in status displays.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityState::Unknown => "unknown",
            ConnectivityState::Healthy => "healthy",
            ConnectivityState::Connected => "connected",
            ConnectivityState::Error => "error",
            ConnectivityState::Offline => "offline",
        }
    }

    /// Returns `true` if the last probe reached a working backend.
    pub fn is_reachable(&self) -> bool {
        matches!(self, ConnectivityState::Healthy | ConnectivityState::Connected)
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
