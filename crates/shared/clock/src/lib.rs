//! Tradedeck Clock Infrastructure
//!
//! Time sources behind the `Clock` port:
//!
//! - [`SystemClock`]: wall-clock time for the running dashboard
//! - [`FixedClock`]: a frozen instant that can be stepped by hand, for
//!   deterministic market-session and timeline views

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tradedeck_ports::Clock;
