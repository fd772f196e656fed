//! Tradedeck Derived Metrics
//!
//! Pure functions mapping order and market primitives to the numbers the
//! dashboard widgets display:
//!
//! - **Risk/Reward**: risk, reward, ratio and chart positions of a trade plan
//! - **Fill Estimate**: expected time to fill from liquidity, spread and session
//! - **Position Sizing**: shares for a risk budget, capped by buying power
//! - **P&L**: position and portfolio profit/loss
//! - **Portfolio Risk**: drawdown, leverage, concentration and daily-loss levels
//! - **Fill Progress**: filled/pending share breakdown of a working order
//! - **Market Session**: pre-market/open/after-hours status
//!
//! Every calculation is recomputed from its inputs on each call; nothing here
//! keeps running state. Degenerate inputs map to documented sentinels (a zero
//! ratio, a zero percentage) instead of errors.
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tradedeck_core::Liquidity;
//! use tradedeck_metrics::{compute_risk_reward, estimate_fill_time};
//!
//! let plan = compute_risk_reward(dec!(100), dec!(90), dec!(120));
//! assert_eq!(plan.ratio, dec!(2));
//!
//! let seconds = estimate_fill_time(dec!(30), Liquidity::Low, dec!(0.05), true);
//! assert_eq!(seconds, dec!(120));
//! ```

pub mod fill_estimate;
pub mod fill_progress;
pub mod pnl;
pub mod portfolio_risk;
pub mod position_sizing;
pub mod risk_reward;
pub mod session;

// Re-export main types
pub use fill_estimate::{
    FillEstimate, FillEstimateConfig, FillEstimateInputs, FillFactor, FillTip, estimate_fill_time,
};
pub use fill_progress::{FillProgress, FillState};
pub use pnl::{PortfolioStats, PositionPnl, PositionSnapshot, calculate_percentage, calculate_pnl};
pub use portfolio_risk::{
    AlertOperator, ComponentRisk, RiskLevel, RiskMetrics, RiskStatus, should_emergency_stop,
};
pub use position_sizing::{PositionSize, PositionSizer, RiskMode};
pub use risk_reward::{
    BRACKET_PRESETS, BracketOrder, BracketPreset, ChartPositions, RatioRating, RiskReward,
    RiskRewardInputs, compute_risk_reward,
};
pub use session::{MarketHours, MarketSession, SessionStatus};
