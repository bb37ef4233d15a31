//! The editable order draft and its validation into a wire-ready order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enums::{OrderSide, OrderType};
use super::primitives::Symbol;

/// The order form's current, unsubmitted values.
///
/// Quantity and price are kept as the operator typed them; they are only
/// parsed by [`validate`]. A draft lives for one session and is never
/// persisted.
///
/// # Example
///
/// ```
/// use order_desk::models::{DraftEdit, OrderDraft, OrderType};
///
/// let mut draft = OrderDraft::default();
/// draft.apply(DraftEdit::OrderType(OrderType::Limit));
/// draft.apply(DraftEdit::Price("42000.5".into()));
///
/// let order = draft.validate().unwrap();
/// assert_eq!(order.price, Some(42000.5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Contract to trade
    pub symbol: Symbol,
    /// Buy or sell
    pub side: OrderSide,
    /// Market or limit
    pub order_type: OrderType,
    /// Quantity as typed
    pub quantity: String,
    /// Limit price as typed; ignored for market orders
    pub price: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            symbol: Symbol::default(),
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            quantity: "0.001".to_string(),
            price: "50000".to_string(),
        }
    }
}

/// A single field edit made by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    /// New symbol text (upper-cased on apply)
    Symbol(String),
    /// New side
    Side(OrderSide),
    /// New order type
    OrderType(OrderType),
    /// New quantity text
    Quantity(String),
    /// New price text
    Price(String),
}

impl OrderDraft {
    /// Create a market order draft.
    pub fn market(symbol: impl AsRef<str>, side: OrderSide, quantity: impl Into<String>) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            side,
            order_type: OrderType::Market,
            quantity: quantity.into(),
            price: String::new(),
        }
    }

    /// Create a limit order draft.
    pub fn limit(
        symbol: impl AsRef<str>,
        side: OrderSide,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            side,
            order_type: OrderType::Limit,
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Apply one field edit.
    ///
    /// Switching to a market order keeps the price text so that switching
    /// back restores it; it is simply ignored while the type is market.
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Symbol(s) => self.symbol = Symbol::new(s),
            DraftEdit::Side(side) => self.side = side,
            DraftEdit::OrderType(t) => self.order_type = t,
            DraftEdit::Quantity(q) => self.quantity = q,
            DraftEdit::Price(p) => self.price = p,
        }
    }

    /// Returns `true` if the price field is relevant for this draft.
    pub fn shows_price(&self) -> bool {
        self.order_type.requires_price()
    }

    /// Returns `true` if the quantity field has any text at all.
    pub fn has_quantity(&self) -> bool {
        !self.quantity.is_empty()
    }

    /// Returns `true` if [`validate`] would succeed.
    pub fn is_submittable(&self) -> bool {
        validate(self).is_ok()
    }

    /// Validate this draft. See [`validate`].
    pub fn validate(&self) -> Result<NormalizedOrder, ValidationError> {
        validate(self)
    }
}

/// A validated order, ready to be posted to `/place-order`.
///
/// `price` is `None` for market orders and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedOrder {
    /// Contract to trade
    pub symbol: Symbol,
    /// Buy or sell
    pub side: OrderSide,
    /// Market or limit
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order quantity
    pub quantity: f64,
    /// Limit price, present only for limit orders
    pub price: Option<f64>,
}

/// Why a draft cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Symbol is empty
    #[error("Symbol is required")]
    MissingSymbol,

    /// Quantity field is empty
    #[error("Quantity is required")]
    MissingQuantity,

    /// Quantity is not a finite number
    #[error("Quantity must be a number, got '{0}'")]
    InvalidQuantity(String),

    /// Quantity is zero or negative
    #[error("Quantity must be greater than zero, got '{0}'")]
    NonPositiveQuantity(String),

    /// Limit order without a price
    #[error("Price is required for LIMIT orders")]
    MissingPrice,

    /// Price is not a finite number
    #[error("Price must be a number, got '{0}'")]
    InvalidPrice(String),

    /// Price is zero or negative
    #[error("Price must be greater than zero, got '{0}'")]
    NonPositivePrice(String),
}

enum NumberProblem {
    Empty,
    Malformed,
    NotPositive,
}

fn parse_positive(text: &str) -> Result<f64, NumberProblem> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NumberProblem::Empty);
    }
    let value: f64 = trimmed.parse().map_err(|_| NumberProblem::Malformed)?;
    // "inf" and "NaN" parse fine as f64 but are not quantities
    if !value.is_finite() {
        return Err(NumberProblem::Malformed);
    }
    if value <= 0.0 {
        return Err(NumberProblem::NotPositive);
    }
    Ok(value)
}

/// Validate a draft into a [`NormalizedOrder`].
///
/// Pure and deterministic: the same draft always yields the same result.
///
/// # Errors
///
/// Fails when the symbol is blank, the quantity is empty, malformed or not
/// positive, or, for limit orders, the price is empty, malformed or not
/// positive.
pub fn validate(draft: &OrderDraft) -> Result<NormalizedOrder, ValidationError> {
    if draft.symbol.is_blank() {
        return Err(ValidationError::MissingSymbol);
    }

    let quantity = parse_positive(&draft.quantity).map_err(|problem| match problem {
        NumberProblem::Empty => ValidationError::MissingQuantity,
        NumberProblem::Malformed => ValidationError::InvalidQuantity(draft.quantity.clone()),
        NumberProblem::NotPositive => ValidationError::NonPositiveQuantity(draft.quantity.clone()),
    })?;

    let price = match draft.order_type {
        OrderType::Market => None,
        OrderType::Limit => {
            let price = parse_positive(&draft.price).map_err(|problem| match problem {
                NumberProblem::Empty => ValidationError::MissingPrice,
                NumberProblem::Malformed => ValidationError::InvalidPrice(draft.price.clone()),
                NumberProblem::NotPositive => {
                    ValidationError::NonPositivePrice(draft.price.clone())
                }
            })?;
            Some(price)
        }
    };

    Ok(NormalizedOrder {
        symbol: draft.symbol.trimmed(),
        side: draft.side,
        order_type: draft.order_type,
        quantity,
        price,
    })
}
