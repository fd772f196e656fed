//! Status-to-path projection
//!
//! Two entry points produce the displayed lifecycle:
//!
//! - [`project_order_status_path`] renders a bare status. It has no history,
//!   so an error status is shown on its own.
//! - [`project_event_log`] renders what actually happened, from the ordered
//!   event log.

use log::{debug, warn};
use tradedeck_core::{OrderEvent, OrderEventKind, OrderStatus, TimeInForce};

use crate::step::{TimelineStep, mark_states};

/// Display path for an order known only by its current status
///
/// Progress statuses give the success path up to and including `current`.
/// Error statuses give a single terminal step.
pub fn project_order_status_path(current: OrderStatus) -> Vec<TimelineStep> {
    let mut steps: Vec<TimelineStep> = match current.progress_index() {
        Some(index) => OrderStatus::PROGRESS[..=index]
            .iter()
            .copied()
            .map(TimelineStep::new)
            .collect(),
        None => vec![TimelineStep::new(current)],
    };

    mark_states(&mut steps);
    steps
}

/// Display path derived from an ordered event log
///
/// Each progress status reached appears once, in success-path order, stamped
/// with the first event that reached it. Events after the first terminal
/// event are ignored.
pub fn project_event_log(events: &[OrderEvent]) -> Vec<TimelineStep> {
    project_events(events, None)
}

pub(crate) fn project_events(
    events: &[OrderEvent],
    time_in_force: Option<TimeInForce>,
) -> Vec<TimelineStep> {
    let mut reached: [Option<TimelineStep>; 4] = Default::default();
    let mut terminal_error = None;

    for (position, event) in events.iter().enumerate() {
        let status = event.status();
        let step = describe(event, time_in_force);

        match status.progress_index() {
            Some(index) => {
                if let Some(existing) = reached[index].as_mut() {
                    // Keep the first timestamp, show the latest detail
                    existing.description = step.description;
                } else {
                    reached[index] = Some(step);
                }
            }
            None => terminal_error = Some(step),
        }

        if status.is_terminal() {
            let ignored = events.len() - position - 1;
            if ignored > 0 {
                warn!(
                    "Ignoring {} order event(s) recorded after terminal status {}",
                    ignored, status
                );
            }
            break;
        }
    }

    let mut steps: Vec<TimelineStep> = reached.into_iter().flatten().chain(terminal_error).collect();
    mark_states(&mut steps);

    debug!(
        "Projected {} event(s) into {} step(s), current={:?}",
        events.len(),
        steps.len(),
        steps.last().map(|s| s.status)
    );

    steps
}

fn describe(event: &OrderEvent, time_in_force: Option<TimeInForce>) -> TimelineStep {
    let step = TimelineStep::new(event.status()).with_timestamp(event.timestamp);

    match (&event.kind, time_in_force) {
        (OrderEventKind::PartiallyFilled { filled, total }, _) => {
            step.with_detail(&format!("{} of {} filled", filled, total))
        }
        (OrderEventKind::Rejected { reason: Some(reason) }, _) => step.with_detail(reason),
        (OrderEventKind::Expired, Some(tif)) => step.with_detail(tif.label()),
        _ => step,
    }
}
