//! Tradedeck Ports
//!
//! Port definitions (traits) for the Tradedeck dashboard.
//! These define the boundaries between the calculation crates and the
//! presentation layer that hosts them.

mod announcer;
mod clock;

pub use announcer::{Announcer, Politeness};
pub use clock::Clock;
