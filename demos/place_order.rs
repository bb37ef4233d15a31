//! Order placement example.
//!
//! Opens a desk against a running backend, edits the draft and submits it
//! once. The backend address comes from `ORDER_DESK_API_URL`
//! (default `http://localhost:8000`).
//!
//! Run with: cargo run --example place_order -- [SYMBOL] [BUY|SELL] [QUANTITY] [LIMIT_PRICE]

use order_desk::models::{DraftEdit, OrderSide, OrderType};
use order_desk::presenter::Present;
use order_desk::{BackendClient, OrderDesk};

#[tokio::main]
async fn main() -> order_desk::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "BTCUSDT".to_string());
    let side = match args.next().as_deref() {
        Some("SELL") | Some("sell") => OrderSide::Sell,
        _ => OrderSide::Buy,
    };
    let quantity = args.next().unwrap_or_else(|| "0.001".to_string());
    let price = args.next();

    let desk = OrderDesk::open(BackendClient::from_env()?).await;
    println!("Backend status: {}", desk.connectivity().await);

    desk.edit(DraftEdit::Symbol(symbol)).await;
    desk.edit(DraftEdit::Side(side)).await;
    desk.edit(DraftEdit::Quantity(quantity)).await;
    if let Some(price) = price {
        desk.edit(DraftEdit::OrderType(OrderType::Limit)).await;
        desk.edit(DraftEdit::Price(price)).await;
    }

    println!("{}...", desk.submit_label().await);

    match desk.try_submit().await {
        Some(outcome) => {
            if let Some(shown) = outcome.present() {
                println!("[{:?}] {}", shown.tone(), shown.message);
            }
        }
        None => println!("Submit is disabled: enter a quantity first"),
    }

    Ok(())
}
