use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Liquidity tier of an instrument, as shown by the fill estimate widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liquidity {
    High,
    Medium,
    Low,
}

impl Liquidity {
    /// Multiplier applied to a base fill time
    pub fn fill_multiplier(&self) -> Decimal {
        match self {
            Liquidity::High => Decimal::ONE,
            Liquidity::Medium => Decimal::TWO,
            Liquidity::Low => Decimal::from(4),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Liquidity::High => "High",
            Liquidity::Medium => "Medium",
            Liquidity::Low => "Low",
        }
    }
}
