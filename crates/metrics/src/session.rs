//! Market Session Status
//!
//! Classifies an instant into the exchange's trading session, in the
//! exchange's local time:
//!
//! ```text
//! weekday  00:00 ── open ──────── close ── 24:00
//!            PreMarket │  Open      │ AfterHours
//! weekend  Closed all day
//! ```

use chrono::{Datelike, Duration, FixedOffset, NaiveDateTime, NaiveTime, Offset, Utc, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};
use tradedeck_core::Timestamp;
use tradedeck_ports::Clock;

/// Trading session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketSession {
    PreMarket,
    Open,
    AfterHours,
    Closed,
}

impl MarketSession {
    pub fn label(&self) -> &'static str {
        match self {
            MarketSession::PreMarket => "Pre-Market",
            MarketSession::Open => "Market Open",
            MarketSession::AfterHours => "After Hours",
            MarketSession::Closed => "Market Closed",
        }
    }
}

/// Session at an instant, with the time left until it changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session: MarketSession,
    pub seconds_until_change: i64,
}

impl SessionStatus {
    /// `"2h 15m"` from an hour upwards, otherwise `"4m 30s"`
    pub fn countdown(&self) -> String {
        let total = self.seconds_until_change.max(0);
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;

        if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    }
}

/// Regular trading hours of an exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
    /// Exchange offset from UTC; fixed, so daylight saving is not followed
    pub utc_offset_minutes: i32,
}

impl Default for MarketHours {
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 30, 0).unwrap_or(NaiveTime::MIN),
            close: NaiveTime::from_hms_opt(16, 0, 0).unwrap_or(NaiveTime::MIN),
            utc_offset_minutes: -5 * 60,
        }
    }
}

impl MarketHours {
    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Session at `at`
    pub fn status_at(&self, at: Timestamp) -> SessionStatus {
        let local = at.with_timezone(&self.offset()).naive_local();
        let date = local.date();
        let time = local.time();

        let (session, change): (MarketSession, NaiveDateTime) = match date.weekday() {
            Weekday::Sat => (
                MarketSession::Closed,
                (date + Duration::days(2)).and_time(NaiveTime::MIN),
            ),
            Weekday::Sun => (
                MarketSession::Closed,
                (date + Duration::days(1)).and_time(NaiveTime::MIN),
            ),
            _ if time < self.open => (MarketSession::PreMarket, date.and_time(self.open)),
            _ if time < self.close => (MarketSession::Open, date.and_time(self.close)),
            _ => (
                MarketSession::AfterHours,
                (date + Duration::days(1)).and_time(NaiveTime::MIN),
            ),
        };

        let status = SessionStatus {
            session,
            seconds_until_change: (change - local).num_seconds(),
        };

        debug!(
            "Market session at {}: {:?}, changes in {}s",
            at, status.session, status.seconds_until_change
        );

        status
    }

    /// Session now, according to `clock`
    pub fn status_now(&self, clock: &dyn Clock) -> SessionStatus {
        self.status_at(clock.now())
    }

    /// Returns true during regular trading hours
    pub fn is_market_hours(&self, clock: &dyn Clock) -> bool {
        self.status_now(clock).session == MarketSession::Open
    }
}
