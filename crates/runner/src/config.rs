//! Configuration loading for the scenario runner
//!
//! One JSON file tunes every calculation crate. Each section is optional and
//! falls back to its defaults:
//!
//! ```json
//! {
//!   "gesture": { "swipe_threshold": 50, "velocity_policy": { "policy": "reject" } },
//!   "fill_estimate": { "base_estimate_seconds": "30" },
//!   "market_hours": { "open": "09:30:00", "close": "16:00:00", "utc_offset_minutes": -300 }
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tradedeck_gesture::GestureConfig;
use tradedeck_metrics::{FillEstimateConfig, MarketHours};

use crate::error::ConfigError;

/// Largest UTC offset in use, in minutes
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Root configuration for the dashboard calculations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub gesture: GestureConfig,
    pub fill_estimate: FillEstimateConfig,
    pub market_hours: MarketHours,
}

impl DashboardConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(reason) = self.gesture.invalid_reason() {
            return Err(ConfigError::Invalid(format!("gesture: {}", reason)));
        }

        if self.fill_estimate.base_estimate_seconds < Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "fill_estimate: base_estimate_seconds must be >= 0, got {}",
                self.fill_estimate.base_estimate_seconds
            )));
        }

        let hours = &self.market_hours;
        if hours.open >= hours.close {
            return Err(ConfigError::Invalid(format!(
                "market_hours: open ({}) must be before close ({})",
                hours.open, hours.close
            )));
        }
        if hours.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "market_hours: utc_offset_minutes out of range: {}",
                hours.utc_offset_minutes
            )));
        }

        Ok(())
    }
}
