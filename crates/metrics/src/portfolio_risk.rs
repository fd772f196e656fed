//! Portfolio Risk Levels
//!
//! Grades drawdown, daily loss, leverage and concentration against their
//! limits and rolls them up into one status for the risk dashboard.
//!
//! | Percent of limit used | Level |
//! |-----------------------|-------|
//! | >= 90 | Critical |
//! | >= 70 | High |
//! | >= 50 | Medium |
//! | otherwise | Low |

use log::{info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Z-score of a one-sided 95% confidence interval
const VAR_Z_SCORE_95: Decimal = dec!(1.645);

/// Severity of a risk metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_percent_used(percent_used: Decimal) -> Self {
        if percent_used >= dec!(90) {
            RiskLevel::Critical
        } else if percent_used >= dec!(70) {
            RiskLevel::High
        } else if percent_used >= dec!(50) {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Risk levels are healthy",
            RiskLevel::Medium => "Monitor risk metrics closely",
            RiskLevel::High => "Risk levels are elevated",
            RiskLevel::Critical => "Critical risk! Immediate action required",
        }
    }
}

/// `part / whole` in percent, 0 when `whole` is 0
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * dec!(100)
    }
}

/// Parametric 95% value at risk; `volatility` is in percent
pub fn value_at_risk(portfolio_value: Decimal, volatility: Decimal) -> Decimal {
    portfolio_value * (VAR_Z_SCORE_95 * volatility / dec!(100))
}

/// Drawdown from peak in percent (negative below the peak)
pub fn drawdown(current_value: Decimal, peak_value: Decimal) -> Decimal {
    percent_of(current_value - peak_value, peak_value)
}

/// Largest position as a percent of the portfolio
pub fn concentration(largest_position_value: Decimal, total_portfolio_value: Decimal) -> Decimal {
    percent_of(largest_position_value, total_portfolio_value)
}

/// Share of the daily loss limit used, in percent (always non-negative)
pub fn daily_limit_usage(daily_pnl: Decimal, daily_limit: Decimal) -> Decimal {
    percent_of(daily_pnl, daily_limit).abs()
}

/// Share of maximum leverage used, in percent
pub fn leverage_usage(leverage_used: Decimal, leverage_max: Decimal) -> Decimal {
    percent_of(leverage_used, leverage_max)
}

/// Raw risk inputs for the risk dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Percent from peak
    pub current_drawdown: Decimal,
    /// Today's profit/loss
    pub daily_pnl: Decimal,
    /// Daily loss limit in currency
    pub daily_limit: Decimal,
    pub leverage_used: Decimal,
    pub leverage_max: Decimal,
    /// Percent held in the single largest position
    pub concentration_risk: Decimal,
    pub concentration_limit: Decimal,
}

/// Level and supporting figures of one risk component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRisk {
    pub level: RiskLevel,
    /// Amount used (percent, currency or leverage depending on the component)
    pub used: Decimal,
    /// Limit the amount is measured against, when there is one
    pub limit: Option<Decimal>,
}

/// Rolled-up portfolio risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskStatus {
    pub drawdown: ComponentRisk,
    pub daily_pnl: ComponentRisk,
    pub leverage: ComponentRisk,
    pub concentration: ComponentRisk,
    /// Worst component level
    pub overall: RiskLevel,
    pub should_pause_trading: bool,
}

impl RiskStatus {
    pub fn evaluate(metrics: &RiskMetrics) -> Self {
        let drawdown_level = RiskLevel::from_percent_used(metrics.current_drawdown.abs());

        let daily_percent = daily_limit_usage(metrics.daily_pnl, metrics.daily_limit);
        let daily_level = RiskLevel::from_percent_used(daily_percent);

        let leverage_percent = leverage_usage(metrics.leverage_used, metrics.leverage_max);
        let leverage_level = RiskLevel::from_percent_used(leverage_percent);

        let concentration_level = RiskLevel::from_percent_used(metrics.concentration_risk);

        let overall = drawdown_level
            .max(daily_level)
            .max(leverage_level)
            .max(concentration_level);

        let should_pause_trading = overall == RiskLevel::Critical || daily_percent >= dec!(100);

        if should_pause_trading {
            warn!(
                "Risk status critical: drawdown={:?}, daily={:?}, leverage={:?}, concentration={:?}",
                drawdown_level, daily_level, leverage_level, concentration_level
            );
        } else {
            info!("Risk status evaluated: overall={:?}", overall);
        }

        Self {
            drawdown: ComponentRisk {
                level: drawdown_level,
                used: metrics.current_drawdown,
                limit: None,
            },
            daily_pnl: ComponentRisk {
                level: daily_level,
                used: metrics.daily_pnl.abs(),
                limit: Some(metrics.daily_limit),
            },
            leverage: ComponentRisk {
                level: leverage_level,
                used: metrics.leverage_used,
                limit: Some(metrics.leverage_max),
            },
            concentration: ComponentRisk {
                level: concentration_level,
                used: metrics.concentration_risk,
                limit: Some(metrics.concentration_limit),
            },
            overall,
            should_pause_trading,
        }
    }
}

/// Returns true when trading should stop immediately
pub fn should_emergency_stop(status: &RiskStatus) -> bool {
    let daily_limit_hit = status
        .daily_pnl
        .limit
        .is_some_and(|limit| status.daily_pnl.used >= limit);

    status.should_pause_trading || status.overall == RiskLevel::Critical || daily_limit_hit
}

/// Comparison used by alert conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertOperator {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl AlertOperator {
    pub fn evaluate(&self, current: Decimal, threshold: Decimal) -> bool {
        match self {
            AlertOperator::GreaterThan => current > threshold,
            AlertOperator::LessThan => current < threshold,
            AlertOperator::Equal => current == threshold,
            AlertOperator::GreaterOrEqual => current >= threshold,
            AlertOperator::LessOrEqual => current <= threshold,
        }
    }
}
