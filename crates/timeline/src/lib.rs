//! Tradedeck Order Timeline
//!
//! Turns an order's status, or its recorded events, into the ordered list of
//! steps drawn by the lifecycle view.
//!
//! ```text
//! Submitted ──► Accepted ──► Partial Fill ──► Filled
//!      │            │              │
//!      └────────────┴──────────────┴──► Canceled | Rejected | Expired
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tradedeck_core::OrderStatus;
//! use tradedeck_timeline::{StepState, project_order_status_path};
//!
//! let path = project_order_status_path(OrderStatus::PartialFill);
//! assert_eq!(path.len(), 3);
//! assert_eq!(path[2].state, StepState::Active);
//! ```

pub mod projector;
pub mod step;
pub mod timeline;

pub use projector::{project_event_log, project_order_status_path};
pub use step::{StepState, TimelineStep};
pub use timeline::OrderTimeline;
