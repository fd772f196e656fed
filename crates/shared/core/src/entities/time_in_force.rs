use serde::{Deserialize, Serialize};

/// Time-in-force instructions for order validity
///
/// Descriptive only: the dashboard shows these, the broker enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Day order: automatically canceled at end of trading day
    Day,

    /// Good Till Canceled: order remains active until explicitly canceled
    Gtc,

    /// Immediate or Cancel: execute immediately (partially or fully) and cancel unfilled portion
    Ioc,

    /// Fill or Kill: execute immediately and completely, or cancel entire order
    Fok,
}

impl TimeInForce {
    pub fn label(&self) -> &'static str {
        match self {
            TimeInForce::Day => "DAY",
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TimeInForce::Day => "Expires at the end of the trading day",
            TimeInForce::Gtc => "Stays open until canceled",
            TimeInForce::Ioc => "Fills what it can immediately, cancels the rest",
            TimeInForce::Fok => "Fills completely right away or not at all",
        }
    }

    /// Returns true if partial fills are allowed
    pub fn allows_partial_fill(&self) -> bool {
        !matches!(self, TimeInForce::Fok)
    }
}
