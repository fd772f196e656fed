//! Position and portfolio P&L

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tradedeck_core::{Price, Quantity};

/// Profit/loss of a single holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPnl {
    pub pnl: Decimal,
    /// Percent of cost basis; 0 when the cost basis is 0
    pub pnl_percent: Decimal,
}

/// P&L of a holding from its market value and cost basis
pub fn calculate_pnl(current_value: Decimal, shares: Quantity, entry_price: Price) -> PositionPnl {
    let cost = shares * entry_price;
    let pnl = current_value - cost;
    let pnl_percent = if cost.is_zero() {
        Decimal::ZERO
    } else {
        pnl / cost * dec!(100)
    };

    PositionPnl { pnl, pnl_percent }
}

/// `value` as a percentage of `total`, formatted with `decimals` places
///
/// Returns `"0"` when `total` is not positive.
pub fn calculate_percentage(value: Decimal, total: Decimal, decimals: u32) -> String {
    if total > Decimal::ZERO {
        let percent = (value / total * dec!(100)).round_dp(decimals);
        format!("{:.*}", decimals as usize, percent)
    } else {
        "0".to_string()
    }
}

/// A holding as shown on the portfolio card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub symbol: String,
    pub shares: Quantity,
    pub entry_price: Price,
    pub current_price: Price,
}

impl PositionSnapshot {
    pub fn value(&self) -> Decimal {
        self.shares * self.current_price
    }

    pub fn cost(&self) -> Decimal {
        self.shares * self.entry_price
    }

    pub fn pnl(&self) -> PositionPnl {
        calculate_pnl(self.value(), self.shares, self.entry_price)
    }
}

/// Portfolio-level totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_pnl: Decimal,
    pub total_pnl_percent: Decimal,
    /// Break-even holdings count as winners
    pub winning_positions: usize,
    pub losing_positions: usize,
}

impl PortfolioStats {
    pub fn from_positions(positions: &[PositionSnapshot]) -> Self {
        let total_value: Decimal = positions.iter().map(PositionSnapshot::value).sum();
        let total_cost: Decimal = positions.iter().map(PositionSnapshot::cost).sum();
        let total_pnl = total_value - total_cost;
        let total_pnl_percent = if total_cost > Decimal::ZERO {
            total_pnl / total_cost * dec!(100)
        } else {
            Decimal::ZERO
        };

        let winning_positions = positions
            .iter()
            .filter(|p| p.pnl().pnl >= Decimal::ZERO)
            .count();

        Self {
            total_value,
            total_cost,
            total_pnl,
            total_pnl_percent,
            winning_positions,
            losing_positions: positions.len() - winning_positions,
        }
    }

    /// Share of the portfolio held in one position, in percent
    pub fn weight_of(&self, position: &PositionSnapshot) -> Decimal {
        if self.total_value > Decimal::ZERO {
            position.value() / self.total_value * dec!(100)
        } else {
            Decimal::ZERO
        }
    }
}
