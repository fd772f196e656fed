use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tradedeck_core::{OrderEvent, OrderId, OrderStatus, TimeInForce};

use crate::projector::project_events;
use crate::step::TimelineStep;

/// Append-only event log of one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTimeline {
    order_id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_in_force: Option<TimeInForce>,
    #[serde(default)]
    events: Vec<OrderEvent>,
}

impl OrderTimeline {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            time_in_force: None,
            events: Vec::new(),
        }
    }

    /// Expired steps name the order's time-in-force
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn time_in_force(&self) -> Option<TimeInForce> {
        self.time_in_force
    }

    pub fn events(&self) -> &[OrderEvent] {
        &self.events
    }

    /// Append an event
    ///
    /// Events arriving after the order closed are kept in the log but do not
    /// change the displayed path.
    pub fn record(&mut self, event: OrderEvent) {
        if self.is_closed() {
            warn!(
                "Order {} already closed, {} event will not be displayed",
                self.order_id,
                event.status()
            );
        } else {
            debug!("Order {} -> {}", self.order_id, event.status());
        }
        self.events.push(event);
    }

    /// Displayed lifecycle
    pub fn path(&self) -> Vec<TimelineStep> {
        project_events(&self.events, self.time_in_force)
    }

    /// Status shown at the end of the path, `None` before any event
    pub fn current_status(&self) -> Option<OrderStatus> {
        self.path().last().map(|step| step.status)
    }

    /// Returns true once the order filled, failed or expired
    pub fn is_closed(&self) -> bool {
        self.events.iter().any(|event| event.status().is_terminal())
    }
}
