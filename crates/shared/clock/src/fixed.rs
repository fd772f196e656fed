use chrono::Duration;
use std::sync::RwLock;
use tradedeck_core::Timestamp;
use tradedeck_ports::Clock;

/// Clock frozen at a chosen instant
///
/// Time only moves when [`FixedClock::advance`] or [`FixedClock::set`] is called.
pub struct FixedClock {
    now: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self {
            now: RwLock::new(at),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, at: Timestamp) {
        let mut now = self.now.write().unwrap_or_else(|e| e.into_inner());
        *now = at;
    }

    /// Move the clock forward (or backward for negative durations)
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
