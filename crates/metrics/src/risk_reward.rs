//! Risk/Reward Analysis
//!
//! Distances of a trade plan from entry to stop and to target, their ratio,
//! and the normalised positions used to draw the three price lines.
//!
//! ```text
//! risk   = |entry - stop|
//! reward = |target - entry|
//! ratio  = reward / risk        (0 when risk is 0)
//! pos(p) = (p - min) / (max - min) * 100
//! ```

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tradedeck_core::{Price, Quantity};

/// A trade plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRewardInputs {
    pub entry_price: Price,
    pub stop_price: Price,
    pub target_price: Price,
}

impl RiskRewardInputs {
    pub fn new(entry_price: Price, stop_price: Price, target_price: Price) -> Self {
        Self {
            entry_price,
            stop_price,
            target_price,
        }
    }

    pub fn compute(&self) -> RiskReward {
        compute_risk_reward(self.entry_price, self.stop_price, self.target_price)
    }
}

/// Horizontal positions of the three price lines, each in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPositions {
    pub stop: Decimal,
    pub entry: Decimal,
    pub target: Decimal,
}

/// Qualitative grade of a reward/risk ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioRating {
    /// Below 1:1
    Poor,
    /// 1:1 up to 1.5:1
    Fair,
    /// 1.5:1 up to 2:1
    Good,
    /// 2:1 or better
    Excellent,
}

impl RatioRating {
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio >= dec!(2.0) {
            RatioRating::Excellent
        } else if ratio >= dec!(1.5) {
            RatioRating::Good
        } else if ratio >= Decimal::ONE {
            RatioRating::Fair
        } else {
            RatioRating::Poor
        }
    }
}

/// Derived metrics of a trade plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReward {
    pub risk: Decimal,
    pub reward: Decimal,
    /// Reward per unit of risk; 0 when risk is 0
    pub ratio: Decimal,
    /// Distance between stop and target
    pub price_range: Decimal,
    pub positions: ChartPositions,
    pub rating: RatioRating,
}

/// Compute risk, reward, ratio and chart positions
///
/// A zero risk yields a ratio of 0 rather than an error. That sentinel also
/// covers the genuinely undefined case, so callers that care should test
/// `risk.is_zero()` themselves.
///
/// Distances and the ratio saturate at `Decimal::MAX` when the exact value
/// does not fit; positions stay within `[0, 100]`.
pub fn compute_risk_reward(entry: Price, stop: Price, target: Price) -> RiskReward {
    let risk = distance(entry, stop);
    let reward = distance(target, entry);

    let ratio = if risk > Decimal::ZERO {
        reward.checked_div(risk).unwrap_or_else(|| {
            warn!("Ratio out of range: reward={}, risk={}", reward, risk);
            Decimal::MAX
        })
    } else {
        warn!("Zero risk trade plan: entry={}, stop={}", entry, stop);
        Decimal::ZERO
    };

    let min = entry.min(stop).min(target);
    let max = entry.max(stop).max(target);
    let mut range = distance(max, min);
    if range.is_zero() {
        range = Decimal::ONE;
    }
    let scale = |price: Price| {
        let offset = distance(price, min);
        offset
            .checked_mul(dec!(100))
            .and_then(|o| o.checked_div(range))
            .or_else(|| offset.checked_div(range)?.checked_mul(dec!(100)))
            .unwrap_or(dec!(100))
    };

    let result = RiskReward {
        risk,
        reward,
        ratio,
        price_range: distance(target, stop),
        positions: ChartPositions {
            stop: scale(stop),
            entry: scale(entry),
            target: scale(target),
        },
        rating: RatioRating::from_ratio(ratio),
    };

    debug!(
        "Risk/reward: risk={}, reward={}, ratio={}, rating={:?}",
        result.risk, result.reward, result.ratio, result.rating
    );

    result
}

/// `|a - b|`, saturating at `Decimal::MAX`
fn distance(a: Price, b: Price) -> Decimal {
    a.checked_sub(b).map_or(Decimal::MAX, |d| d.abs())
}

/// Named risk/reward percentage presets for brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracketPreset {
    pub name: &'static str,
    pub risk_percent: Decimal,
    pub reward_percent: Decimal,
}

pub const BRACKET_PRESETS: [BracketPreset; 3] = [
    BracketPreset {
        name: "Conservative",
        risk_percent: dec!(1),
        reward_percent: dec!(2),
    },
    BracketPreset {
        name: "Moderate",
        risk_percent: dec!(2),
        reward_percent: dec!(4),
    },
    BracketPreset {
        name: "Balanced",
        risk_percent: dec!(1.5),
        reward_percent: dec!(3),
    },
];

/// Entry with attached stop-loss and take-profit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketOrder {
    pub entry_price: Price,
    pub stop_loss_price: Price,
    pub take_profit_price: Price,
    pub quantity: Quantity,
}

impl BracketOrder {
    pub fn new(
        entry_price: Price,
        stop_loss_price: Price,
        take_profit_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            entry_price,
            stop_loss_price,
            take_profit_price,
            quantity,
        }
    }

    /// Place the stop `risk_percent` below and the target `reward_percent` above entry
    pub fn from_percentages(
        entry_price: Price,
        risk_percent: Decimal,
        reward_percent: Decimal,
        quantity: Quantity,
    ) -> Self {
        Self::new(
            entry_price,
            entry_price * (Decimal::ONE - risk_percent / dec!(100)),
            entry_price * (Decimal::ONE + reward_percent / dec!(100)),
            quantity,
        )
    }

    pub fn from_preset(entry_price: Price, preset: &BracketPreset, quantity: Quantity) -> Self {
        Self::from_percentages(
            entry_price,
            preset.risk_percent,
            preset.reward_percent,
            quantity,
        )
    }

    /// Move the entry and drag stop and target along at their current distances
    pub fn with_entry(&self, new_entry: Price) -> Self {
        let stop_distance = (self.stop_loss_price - self.entry_price).abs();
        let target_distance = (self.take_profit_price - self.entry_price).abs();

        Self {
            entry_price: new_entry,
            stop_loss_price: new_entry - stop_distance,
            take_profit_price: new_entry + target_distance,
            quantity: self.quantity,
        }
    }

    pub fn risk_reward(&self) -> RiskReward {
        compute_risk_reward(
            self.entry_price,
            self.stop_loss_price,
            self.take_profit_price,
        )
    }

    /// Loss if the stop is hit
    pub fn max_loss(&self) -> Decimal {
        (self.entry_price - self.stop_loss_price).abs() * self.quantity
    }

    /// Profit if the target is hit
    pub fn max_profit(&self) -> Decimal {
        (self.take_profit_price - self.entry_price).abs() * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_long_plan() {
        let rr = compute_risk_reward(dec!(100), dec!(90), dec!(120));

        assert_eq!(rr.risk, dec!(10));
        assert_eq!(rr.reward, dec!(20));
        assert_eq!(rr.ratio, dec!(2.0));
        assert_eq!(rr.price_range, dec!(30));
        assert_eq!(rr.rating, RatioRating::Excellent);
    }

    #[test]
    fn test_zero_risk_ratio_is_zero() {
        let rr = compute_risk_reward(dec!(100), dec!(100), dec!(120));

        assert_eq!(rr.risk, Decimal::ZERO);
        assert_eq!(rr.reward, dec!(20));
        assert_eq!(rr.ratio, Decimal::ZERO);
        assert_eq!(rr.rating, RatioRating::Poor);
    }

    #[test]
    fn test_chart_positions_min_max_scaled() {
        let rr = compute_risk_reward(dec!(100), dec!(90), dec!(120));

        assert_eq!(rr.positions.stop, Decimal::ZERO);
        assert_eq!(rr.positions.target, dec!(100));
        assert_eq!(rr.positions.entry.round_dp(2), dec!(33.33));
    }

    #[test]
    fn test_short_plan_positions() {
        // Short: stop above entry, target below
        let rr = compute_risk_reward(dec!(50), dec!(55), dec!(40));

        assert_eq!(rr.risk, dec!(5));
        assert_eq!(rr.reward, dec!(10));
        assert_eq!(rr.ratio, dec!(2));
        assert_eq!(rr.positions.target, Decimal::ZERO);
        assert_eq!(rr.positions.entry.round_dp(4), dec!(66.6667));
        assert_eq!(rr.positions.stop, dec!(100));
    }

    #[test]
    fn test_flat_prices_do_not_divide_by_zero() {
        let rr = compute_risk_reward(dec!(10), dec!(10), dec!(10));

        assert_eq!(rr.ratio, Decimal::ZERO);
        assert_eq!(rr.positions.stop, Decimal::ZERO);
        assert_eq!(rr.positions.entry, Decimal::ZERO);
        assert_eq!(rr.positions.target, Decimal::ZERO);
    }

    #[test]
    fn test_degenerate_negative_prices_are_defined() {
        let rr = compute_risk_reward(dec!(-5), dec!(-10), dec!(0));

        assert_eq!(rr.risk, dec!(5));
        assert_eq!(rr.reward, dec!(5));
        assert_eq!(rr.ratio, Decimal::ONE);
        assert_eq!(rr.rating, RatioRating::Fair);
    }

    #[test]
    fn test_large_prices_scale_without_overflow() {
        let entry = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        let rr = compute_risk_reward(entry, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(rr.risk, entry);
        assert_eq!(rr.reward, entry);
        assert_eq!(rr.ratio, Decimal::ONE);
        assert_eq!(rr.positions.entry, dec!(100));
        assert_eq!(rr.positions.stop, Decimal::ZERO);
        assert_eq!(rr.positions.target, Decimal::ZERO);
    }

    #[test]
    fn test_extreme_distances_saturate() {
        let rr = compute_risk_reward(Decimal::MAX, Decimal::MIN, Decimal::ZERO);

        assert_eq!(rr.risk, Decimal::MAX);
        assert_eq!(rr.price_range, Decimal::MAX);
        assert_eq!(rr.positions.entry, dec!(100));
        assert_eq!(rr.positions.stop, Decimal::ZERO);
        assert!(rr.positions.target >= Decimal::ZERO && rr.positions.target <= dec!(100));
    }

    #[test]
    fn test_tiny_risk_ratio_saturates() {
        let rr = compute_risk_reward(Decimal::new(1, 28), Decimal::ZERO, dec!(1000));

        assert_eq!(rr.ratio, Decimal::MAX);
        assert_eq!(rr.rating, RatioRating::Excellent);
        assert_eq!(rr.positions.target, dec!(100));
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(RatioRating::from_ratio(dec!(0.99)), RatioRating::Poor);
        assert_eq!(RatioRating::from_ratio(dec!(1.0)), RatioRating::Fair);
        assert_eq!(RatioRating::from_ratio(dec!(1.5)), RatioRating::Good);
        assert_eq!(RatioRating::from_ratio(dec!(1.99)), RatioRating::Good);
        assert_eq!(RatioRating::from_ratio(dec!(2)), RatioRating::Excellent);
    }

    #[test]
    fn test_bracket_from_preset() {
        let bracket = BracketOrder::from_preset(dec!(200), &BRACKET_PRESETS[0], dec!(10));

        assert_eq!(bracket.stop_loss_price, dec!(198));
        assert_eq!(bracket.take_profit_price, dec!(204));
        assert_eq!(bracket.max_loss(), dec!(20));
        assert_eq!(bracket.max_profit(), dec!(40));
        assert_eq!(bracket.risk_reward().ratio, dec!(2));
    }

    #[test]
    fn test_bracket_linked_entry_move() {
        let bracket = BracketOrder::new(dec!(100), dec!(98), dec!(104), dec!(5));
        let moved = bracket.with_entry(dec!(110));

        assert_eq!(moved.entry_price, dec!(110));
        assert_eq!(moved.stop_loss_price, dec!(108));
        assert_eq!(moved.take_profit_price, dec!(114));
        assert_eq!(moved.quantity, dec!(5));
    }
}
