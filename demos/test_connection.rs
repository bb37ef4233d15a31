//! Connection test example.
//!
//! Runs the startup probe and then the authenticated connection test,
//! printing the connectivity after each.
//!
//! Run with: cargo run --example test_connection

use order_desk::presenter::Present;
use order_desk::{BackendClient, OrderDesk};

#[tokio::main]
async fn main() -> order_desk::Result<()> {
    tracing_subscriber::fmt::init();

    let client = BackendClient::from_env()?;
    println!("Probing {}", client.config().base_url);

    let desk = OrderDesk::open(client).await;
    println!("After startup probe: {}", desk.connectivity().await);

    let outcome = desk.test_connection().await;
    println!("After connection test: {}", desk.connectivity().await);
    if let Some(shown) = outcome.present() {
        println!("{}", shown.message);
    }

    Ok(())
}
