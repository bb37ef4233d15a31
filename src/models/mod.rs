//! Data models for the order desk.
//!
//! - [`primitives`] - The `Symbol` newtype
//! - [`enums`] - Order side, order type and connectivity state
//! - [`order`] - The editable draft, validation and the wire order
//! - [`balance`] - Connection-test report and wallet balance
//! - [`health`] - Liveness check report

pub mod primitives;
pub mod enums;
pub mod order;
pub mod balance;
pub mod health;

pub use primitives::*;
pub use enums::*;
pub use order::*;
pub use balance::*;
pub use health::*;
