use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tradedeck_core::Quantity;

/// Fill state of a working order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillState {
    Pending,
    PartiallyFilled,
    FullyFilled,
}

impl FillState {
    pub fn label(&self) -> &'static str {
        match self {
            FillState::Pending => "Pending",
            FillState::PartiallyFilled => "Partially Filled",
            FillState::FullyFilled => "Fully Filled",
        }
    }
}

/// Filled/pending breakdown for the fill progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillProgress {
    pub total: Quantity,
    pub filled: Quantity,
    /// 0 for an empty order
    pub fill_percent: Decimal,
    pub pending: Quantity,
    pub state: FillState,
}

impl FillProgress {
    pub fn new(total: Quantity, filled: Quantity) -> Self {
        let fill_percent = if total > Decimal::ZERO {
            filled / total * dec!(100)
        } else {
            Decimal::ZERO
        };

        let state = if fill_percent >= dec!(100) {
            FillState::FullyFilled
        } else if fill_percent > Decimal::ZERO {
            FillState::PartiallyFilled
        } else {
            FillState::Pending
        };

        Self {
            total,
            filled,
            fill_percent,
            pending: total - filled,
            state,
        }
    }

    /// Percentage with one decimal, as shown under the bar
    pub fn display_percent(&self) -> String {
        format!("{:.1}% Filled", self.fill_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_fill() {
        let progress = FillProgress::new(dec!(200), dec!(50));

        assert_eq!(progress.fill_percent, dec!(25));
        assert_eq!(progress.pending, dec!(150));
        assert_eq!(progress.state, FillState::PartiallyFilled);
        assert_eq!(progress.display_percent(), "25.0% Filled");
    }

    #[test]
    fn test_full_and_pending() {
        assert_eq!(
            FillProgress::new(dec!(10), dec!(10)).state,
            FillState::FullyFilled
        );
        assert_eq!(
            FillProgress::new(dec!(10), Decimal::ZERO).state,
            FillState::Pending
        );
    }

    #[test]
    fn test_empty_order() {
        let progress = FillProgress::new(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(progress.fill_percent, Decimal::ZERO);
        assert_eq!(progress.state, FillState::Pending);
    }
}
