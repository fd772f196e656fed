//! Order Fill Time Estimation
//!
//! Starts from a base estimate and applies independent multipliers:
//!
//! ```text
//! fill = base x liquidity x spread x session
//!
//! liquidity: high x1, medium x2, low x4
//! spread:    x1.5 when spread/price exceeds 0.1%
//! session:   x3 outside market hours
//! ```
//!
//! Every call starts again from the base, so repeated estimates for the same
//! inputs are identical.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tradedeck_core::{Liquidity, Price, Quantity};

/// Spread percentage above which the spread slows fills
const WIDE_SPREAD_PERCENT: Decimal = dec!(0.1);
/// Multiplier for a wide spread
const WIDE_SPREAD_MULTIPLIER: Decimal = dec!(1.5);
/// Multiplier outside market hours
const OFF_HOURS_MULTIPLIER: Decimal = dec!(3);

/// Estimate fill time in seconds
///
/// `spread_percent` is the spread as a percentage of price (0.1 means 0.1%).
pub fn estimate_fill_time(
    base_seconds: Decimal,
    liquidity: Liquidity,
    spread_percent: Decimal,
    is_market_hours: bool,
) -> Decimal {
    let factors = applied_factors(liquidity, spread_percent > WIDE_SPREAD_PERCENT, is_market_hours);
    slow_down(base_seconds, &factors)
}

/// Apply every multiplier to the base, saturating at `Decimal::MAX`
fn slow_down(base_seconds: Decimal, factors: &[FillFactor]) -> Decimal {
    factors.iter().fold(base_seconds, |estimate, factor| {
        estimate
            .checked_mul(factor.multiplier())
            .unwrap_or(Decimal::MAX)
    })
}

fn applied_factors(liquidity: Liquidity, wide_spread: bool, is_market_hours: bool) -> Vec<FillFactor> {
    let mut factors = Vec::with_capacity(3);
    if liquidity != Liquidity::High {
        factors.push(FillFactor::Liquidity(liquidity));
    }
    if wide_spread {
        factors.push(FillFactor::WideSpread);
    }
    if !is_market_hours {
        factors.push(FillFactor::OutsideMarketHours);
    }
    factors
}

/// A condition that slowed the estimate down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "factor", content = "level", rename_all = "snake_case")]
pub enum FillFactor {
    Liquidity(Liquidity),
    WideSpread,
    OutsideMarketHours,
}

impl FillFactor {
    pub fn multiplier(&self) -> Decimal {
        match self {
            FillFactor::Liquidity(level) => level.fill_multiplier(),
            FillFactor::WideSpread => WIDE_SPREAD_MULTIPLIER,
            FillFactor::OutsideMarketHours => OFF_HOURS_MULTIPLIER,
        }
    }
}

/// Advice shown under the estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillTip {
    LowLiquidity,
    AfterHours,
    WideSpread,
    OptimalConditions,
}

impl FillTip {
    pub fn message(&self) -> &'static str {
        match self {
            FillTip::LowLiquidity => {
                "Low Liquidity: This asset has few buyers/sellers. Consider using a limit order or splitting your trade."
            }
            FillTip::AfterHours => {
                "After Hours: Trading is slower with wider spreads. Your order may take longer to fill."
            }
            FillTip::WideSpread => {
                "Wide Spread: The bid-ask spread is large. You may get worse pricing than expected."
            }
            FillTip::OptimalConditions => {
                "Optimal Conditions: High liquidity during market hours. Your order should fill quickly!"
            }
        }
    }
}

/// Estimator defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FillEstimateConfig {
    /// Base estimate when the caller has none
    pub base_estimate_seconds: Decimal,
}

impl Default for FillEstimateConfig {
    fn default() -> Self {
        Self {
            base_estimate_seconds: dec!(30),
        }
    }
}

/// Everything the fill estimate widget knows about an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillEstimateInputs {
    pub order_size: Quantity,
    pub current_price: Price,
    pub spread_width: Price,
    pub liquidity: Liquidity,
    pub is_market_hours: bool,
    #[serde(default)]
    pub base_estimate_seconds: Option<Decimal>,
}

impl FillEstimateInputs {
    /// Spread as a percentage of price
    ///
    /// `None` when the price is not positive or the percentage does not fit
    /// a `Decimal`; the spread then only counts as wide if it is itself
    /// positive.
    pub fn spread_percent(&self) -> Option<Decimal> {
        if self.current_price > Decimal::ZERO {
            self.spread_width
                .checked_div(self.current_price)?
                .checked_mul(dec!(100))
        } else {
            None
        }
    }

    fn is_wide_spread(&self) -> bool {
        match self.spread_percent() {
            Some(percent) => percent > WIDE_SPREAD_PERCENT,
            None => self.spread_width > Decimal::ZERO,
        }
    }

    /// Estimate with the default base
    pub fn estimate(&self) -> FillEstimate {
        self.estimate_with(&FillEstimateConfig::default())
    }

    pub fn estimate_with(&self, config: &FillEstimateConfig) -> FillEstimate {
        let base = self
            .base_estimate_seconds
            .unwrap_or(config.base_estimate_seconds);
        let wide_spread = self.is_wide_spread();

        let factors = applied_factors(self.liquidity, wide_spread, self.is_market_hours);
        let seconds = slow_down(base, &factors);

        let mut tips = Vec::new();
        if self.liquidity == Liquidity::Low {
            tips.push(FillTip::LowLiquidity);
        }
        if !self.is_market_hours {
            tips.push(FillTip::AfterHours);
        }
        if wide_spread {
            tips.push(FillTip::WideSpread);
        }
        if self.liquidity == Liquidity::High && self.is_market_hours && !wide_spread {
            tips.push(FillTip::OptimalConditions);
        }

        debug!(
            "Fill estimate: size={}, base={}s, factors={:?}, estimate={}s",
            self.order_size, base, factors, seconds
        );

        FillEstimate {
            seconds,
            spread_percent: self.spread_percent(),
            factors,
            tips,
        }
    }
}

/// Result of a fill time estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillEstimate {
    pub seconds: Decimal,
    pub spread_percent: Option<Decimal>,
    pub factors: Vec<FillFactor>,
    pub tips: Vec<FillTip>,
}

impl FillEstimate {
    /// Combined multiplier over the base
    pub fn total_multiplier(&self) -> Decimal {
        self.factors
            .iter()
            .fold(Decimal::ONE, |total, factor| total * factor.multiplier())
    }

    /// `"< 45s"` under a minute, otherwise `"2m 15s"`
    pub fn display(&self) -> String {
        let seconds = self.seconds.round_dp(0);
        if seconds < dec!(60) {
            return format!("< {}s", seconds.normalize());
        }
        let minutes = (seconds / dec!(60)).floor();
        let remainder = seconds - minutes * dec!(60);
        format!("{}m {}s", minutes.normalize(), remainder.normalize())
    }
}
