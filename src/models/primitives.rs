//! Primitive types and newtypes for type-safe order entry.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A futures ticker symbol (e.g., "BTCUSDT").
///
/// Symbols are upper-cased on construction, the same way the order form
/// upper-cases every keystroke. No other client-side check is made; the
/// backend decides whether the contract exists.
///
/// # Example
///
/// ```
/// use order_desk::Symbol;
///
/// let symbol = Symbol::new("btcusdt");
/// assert_eq!(symbol.as_str(), "BTCUSDT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol, upper-casing the input.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().to_uppercase())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the symbol is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The symbol with surrounding whitespace removed.
    pub fn trimmed(&self) -> Symbol {
        Symbol(self.0.trim().to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Symbol::new)
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self("BTCUSDT".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_uppercases() {
        let symbol: Symbol = "ethusdt".into();
        assert_eq!(symbol.as_str(), "ETHUSDT");
        assert_eq!(symbol.to_string(), "ETHUSDT");
    }

    #[test]
    fn test_symbol_blank() {
        assert!(Symbol::new("").is_blank());
        assert!(Symbol::new("   ").is_blank());
        assert!(!Symbol::new("BTCUSDT").is_blank());
        assert_eq!(Symbol::new(" solusdt ").trimmed().as_str(), "SOLUSDT");
    }

    #[test]
    fn test_symbol_default() {
        assert_eq!(Symbol::default().as_str(), "BTCUSDT");
    }

    #[test]
    fn test_symbol_serializes_transparently() {
        let json = serde_json::to_string(&Symbol::new("BTCUSDT")).unwrap();
        assert_eq!(json, "\"BTCUSDT\"");
    }

    #[test]
    fn test_symbol_deserialize_uppercases() {
        let symbol: Symbol = serde_json::from_str("\"btcusdt\"").unwrap();
        assert_eq!(symbol, Symbol::new("BTCUSDT"));
    }
}
