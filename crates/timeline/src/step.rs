use serde::{Deserialize, Serialize};
use tradedeck_core::{OrderStatus, Timestamp};

/// How a step is drawn on the lifecycle view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Error,
}

/// One entry of a displayed order lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub status: OrderStatus,
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    pub state: StepState,
}

impl TimelineStep {
    pub fn new(status: OrderStatus) -> Self {
        Self {
            status,
            label: status.label().to_string(),
            description: status.description().to_string(),
            timestamp: None,
            state: StepState::Completed,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Append a parenthesised detail to the description
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.description = format!("{} ({})", self.status.description(), detail);
        self
    }

    pub fn is_error(&self) -> bool {
        self.state == StepState::Error
    }
}

/// Every step but the last is Completed; the last is Error for a failed
/// order and Active otherwise.
pub(crate) fn mark_states(steps: &mut [TimelineStep]) {
    let last = steps.len().saturating_sub(1);
    for (index, step) in steps.iter_mut().enumerate() {
        step.state = if index < last {
            StepState::Completed
        } else if step.status.is_terminal_error() {
            StepState::Error
        } else {
            StepState::Active
        };
    }
}
