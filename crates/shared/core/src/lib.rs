//! Tradedeck Core Domain
//!
//! Pure value types shared by the dashboard calculation crates.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Liquidity, OrderEvent, OrderEventKind, OrderStatus, Side, TimeInForce};
pub use values::{OrderId, Price, Quantity, Timestamp};
