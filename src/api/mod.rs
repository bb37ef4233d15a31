//! API service modules for the trading backend's endpoints.
//!
//! Each service wraps one endpoint group.

mod account;
mod connection;
mod health;
mod orders;

pub use account::AccountService;
pub use connection::ConnectionService;
pub use health::HealthService;
pub use orders::OrdersService;
