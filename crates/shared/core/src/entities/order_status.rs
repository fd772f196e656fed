use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status as displayed on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order placed with the broker
    Submitted,
    /// Broker validated the order
    Accepted,
    /// Partial execution in progress
    PartialFill,
    /// Order completely executed
    Filled,
    /// Order was canceled
    Canceled,
    /// Order was rejected by the broker
    Rejected,
    /// Order expired without execution
    Expired,
}

impl OrderStatus {
    /// The ordered success path, first step to last
    pub const PROGRESS: [OrderStatus; 4] = [
        OrderStatus::Submitted,
        OrderStatus::Accepted,
        OrderStatus::PartialFill,
        OrderStatus::Filled,
    ];

    /// Position of this status on the success path, `None` for error states
    pub fn progress_index(&self) -> Option<usize> {
        Self::PROGRESS.iter().position(|s| s == self)
    }

    /// Returns true for canceled, rejected and expired
    pub fn is_terminal_error(&self) -> bool {
        matches!(
            self,
            OrderStatus::Canceled | OrderStatus::Rejected | OrderStatus::Expired
        )
    }

    /// Returns true if the order can no longer change
    pub fn is_terminal(&self) -> bool {
        self.is_terminal_error() || *self == OrderStatus::Filled
    }

    /// Returns true if the order is still working at the broker
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Submitted => "Submitted",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::PartialFill => "Partial Fill",
            OrderStatus::Filled => "Filled",
            OrderStatus::Canceled => "Canceled",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Expired => "Expired",
        }
    }

    /// One-line description for the lifecycle view
    pub fn description(&self) -> &'static str {
        match self {
            OrderStatus::Submitted => "Order placed with broker",
            OrderStatus::Accepted => "Broker validated order",
            OrderStatus::PartialFill => "Partial execution in progress",
            OrderStatus::Filled => "Order completely executed",
            OrderStatus::Canceled => "Order was canceled",
            OrderStatus::Rejected => "Order was rejected by broker",
            OrderStatus::Expired => "Order expired without execution",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
