use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::OrderStatus;
use crate::values::{Quantity, Timestamp};

/// What happened to an order, one variant per lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OrderEventKind {
    Submitted,
    Accepted,
    /// An execution that left quantity open
    PartiallyFilled { filled: Quantity, total: Quantity },
    Filled,
    Canceled,
    Rejected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    Expired,
}

impl OrderEventKind {
    /// Status the order is in right after this event
    pub fn status(&self) -> OrderStatus {
        match self {
            OrderEventKind::Submitted => OrderStatus::Submitted,
            OrderEventKind::Accepted => OrderStatus::Accepted,
            OrderEventKind::PartiallyFilled { .. } => OrderStatus::PartialFill,
            OrderEventKind::Filled => OrderStatus::Filled,
            OrderEventKind::Canceled => OrderStatus::Canceled,
            OrderEventKind::Rejected { .. } => OrderStatus::Rejected,
            OrderEventKind::Expired => OrderStatus::Expired,
        }
    }
}

/// A recorded lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    #[serde(flatten)]
    pub kind: OrderEventKind,
    pub timestamp: Timestamp,
}

impl OrderEvent {
    /// Create an event with explicit timestamp
    pub fn new_with_time(kind: OrderEventKind, timestamp: Timestamp) -> Self {
        Self { kind, timestamp }
    }

    /// Create an event stamped with the current system time
    /// Note: for deterministic views, prefer `new_with_time` with clock-provided time
    pub fn new(kind: OrderEventKind) -> Self {
        Self::new_with_time(kind, Utc::now())
    }

    pub fn status(&self) -> OrderStatus {
        self.kind.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_status_mapping() {
        let partial = OrderEventKind::PartiallyFilled {
            filled: dec!(40),
            total: dec!(100),
        };
        assert_eq!(partial.status(), OrderStatus::PartialFill);
        assert_eq!(
            OrderEventKind::Rejected { reason: None }.status(),
            OrderStatus::Rejected
        );
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"{"type":"rejected","reason":"insufficient funds","timestamp":"2024-03-01T14:30:00Z"}"#;
        let event: OrderEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.status(), OrderStatus::Rejected);
        assert_eq!(
            event.kind,
            OrderEventKind::Rejected {
                reason: Some("insufficient funds".to_string())
            }
        );
    }
}
