use chrono::Utc;
use tradedeck_core::Timestamp;
use tradedeck_ports::Clock;

/// Wall-clock time in UTC
///
/// Used by the `tradedeck` binary. Market-session views convert to exchange
/// local time themselves, so no offset is applied here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
