//! ARIA labels and live-region announcements

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tradedeck_ports::{Announcer, Politeness};

/// `"label: value"` or `"label: value unit"`
pub fn aria_label(label: &str, value: impl Display, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{}: {} {}", label, value, unit),
        _ => format!("{}: {}", label, value),
    }
}

/// `"label: $1,234.50"`
pub fn aria_label_currency(label: &str, value: Decimal) -> String {
    format!("{}: {}", label, format_usd(value))
}

/// `"label: 12.34 percent"`
pub fn aria_label_percent(label: &str, value: f64) -> String {
    format!("{}: {:.2} percent", label, value)
}

/// US dollar amount with thousands separators; negatives as `-$1.00`
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Urgency of a dashboard update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Only high-priority updates interrupt the screen reader
    pub fn politeness(&self) -> Politeness {
        match self {
            Priority::High => Politeness::Assertive,
            Priority::Low | Priority::Medium => Politeness::Polite,
        }
    }
}

/// Live-region politeness for an update of `priority`
pub fn aria_live(priority: Priority) -> Politeness {
    priority.politeness()
}

/// Hand `message` to the screen reader at the politeness `priority` calls for
pub fn announce(announcer: &dyn Announcer, message: &str, priority: Priority) {
    let politeness = priority.politeness();
    debug!("Announcing ({}): {}", politeness.as_str(), message);
    announcer.announce(message, politeness);
}
