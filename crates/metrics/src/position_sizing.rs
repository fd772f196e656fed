//! Position Sizing
//!
//! Sizes a position so that hitting the stop loses the chosen risk budget:
//!
//! ```text
//! budget = fixed amount | percent x buying power
//! shares = min(floor(budget / |entry - stop|), floor(buying power / entry))
//! ```

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tradedeck_core::{Price, Quantity, Side};

/// How the risk budget is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum RiskMode {
    /// Currency amount at risk
    Fixed(Decimal),
    /// Percent of buying power at risk, clamped to [0, 100]
    Percent(Decimal),
}

/// Position sizing calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSizer {
    pub buying_power: Decimal,
    pub risk_mode: RiskMode,
}

/// A sized position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSize {
    pub shares: Quantity,
    pub total_cost: Decimal,
    /// Amount lost if the stop is hit
    pub risk_amount: Decimal,
    /// Target two risk units away from entry
    pub suggested_target: Price,
    pub is_sufficient_funds: bool,
}

impl PositionSizer {
    pub fn new(buying_power: Decimal, risk_mode: RiskMode) -> Self {
        Self {
            buying_power,
            risk_mode,
        }
    }

    /// Currency amount the position may lose
    pub fn risk_budget(&self) -> Decimal {
        match self.risk_mode {
            RiskMode::Fixed(amount) => amount.max(Decimal::ZERO),
            RiskMode::Percent(percent) => {
                percent.clamp(Decimal::ZERO, dec!(100)) / dec!(100) * self.buying_power
            }
        }
    }

    /// Size a position, `None` for an invalid setup
    ///
    /// A setup is invalid when either price is not positive or entry equals stop.
    pub fn size(&self, side: Side, entry: Price, stop: Price) -> Option<PositionSize> {
        if entry <= Decimal::ZERO || stop <= Decimal::ZERO || entry == stop {
            return None;
        }

        let price_risk = (entry - stop).abs();
        let by_risk = (self.risk_budget() / price_risk).floor();
        let by_funds = (self.buying_power.max(Decimal::ZERO) / entry).floor();
        let shares = by_risk.min(by_funds);
        let total_cost = shares * entry;

        let suggested_target = match side {
            Side::Buy => entry + price_risk * Decimal::TWO,
            Side::Sell => entry - price_risk * Decimal::TWO,
        };

        debug!(
            "Position sized: side={:?}, by_risk={}, by_funds={}, shares={}",
            side, by_risk, by_funds, shares
        );

        Some(PositionSize {
            shares,
            total_cost,
            risk_amount: shares * price_risk,
            suggested_target,
            is_sufficient_funds: total_cost <= self.buying_power,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_risk_sizing() {
        let sizer = PositionSizer::new(dec!(10000), RiskMode::Fixed(dec!(100)));
        let size = sizer.size(Side::Buy, dec!(50), dec!(49)).unwrap();

        // 100 / 1 = 100 shares, 10000 / 50 = 200 affordable
        assert_eq!(size.shares, dec!(100));
        assert_eq!(size.total_cost, dec!(5000));
        assert_eq!(size.risk_amount, dec!(100));
        assert_eq!(size.suggested_target, dec!(52));
        assert!(size.is_sufficient_funds);
    }

    #[test]
    fn test_capped_by_buying_power() {
        let sizer = PositionSizer::new(dec!(1000), RiskMode::Fixed(dec!(500)));
        let size = sizer.size(Side::Buy, dec!(100), dec!(99.5)).unwrap();

        // 500 / 0.5 = 1000 by risk, only 10 affordable
        assert_eq!(size.shares, dec!(10));
        assert_eq!(size.total_cost, dec!(1000));
    }

    #[test]
    fn test_percent_risk_sizing() {
        let sizer = PositionSizer::new(dec!(20000), RiskMode::Percent(dec!(1)));
        assert_eq!(sizer.risk_budget(), dec!(200));

        let size = sizer.size(Side::Sell, dec!(40), dec!(43)).unwrap();
        // floor(200 / 3) = 66
        assert_eq!(size.shares, dec!(66));
        assert_eq!(size.suggested_target, dec!(34));
    }

    #[test]
    fn test_percent_is_clamped() {
        let sizer = PositionSizer::new(dec!(1000), RiskMode::Percent(dec!(250)));
        assert_eq!(sizer.risk_budget(), dec!(1000));

        let negative = PositionSizer::new(dec!(1000), RiskMode::Percent(dec!(-5)));
        assert_eq!(negative.risk_budget(), Decimal::ZERO);
    }

    #[test]
    fn test_invalid_setups() {
        let sizer = PositionSizer::new(dec!(1000), RiskMode::Fixed(dec!(100)));

        assert!(sizer.size(Side::Buy, dec!(50), dec!(50)).is_none());
        assert!(sizer.size(Side::Buy, Decimal::ZERO, dec!(49)).is_none());
        assert!(sizer.size(Side::Buy, dec!(50), dec!(-1)).is_none());
    }
}
