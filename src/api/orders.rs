//! Orders service for order placement.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::NormalizedOrder;
use crate::Result;

/// Service for order operations.
///
/// Only validated orders can be sent; build one with
/// [`OrderDraft::validate`](crate::models::OrderDraft::validate).
///
/// # Example
///
/// ```no_run
/// use order_desk::models::{OrderDraft, OrderSide};
///
/// # async fn example(client: order_desk::BackendClient) -> order_desk::Result<()> {
/// let order = OrderDraft::limit("BTCUSDT", OrderSide::Sell, "0.01", "65000").validate()?;
/// let ack = client.orders().place(&order).await?;
/// println!("Order acknowledged: {}", ack["orderId"]);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Place a new order with `POST /place-order`.
    ///
    /// Exactly one request is made. The acknowledgement is opaque to this
    /// crate and returned as received.
    pub async fn place(&self, order: &NormalizedOrder) -> Result<Value> {
        tracing::info!(
            symbol = %order.symbol,
            side = %order.side,
            order_type = %order.order_type,
            quantity = order.quantity,
            price = ?order.price,
            "placing order"
        );
        self.inner.post("/place-order", order).await
    }
}
