//! Gesture tuning
//!
//! All thresholds are in CSS pixels and milliseconds.

use serde::{Deserialize, Serialize};

use crate::touch::is_long_press;
use crate::viewport::is_mobile_viewport;

/// What a swipe velocity is when the reported elapsed time is not positive
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum VelocityPolicy {
    /// Velocity is `+inf`; the swipe still counts
    #[default]
    Infinite,
    /// Divide by at least `min_elapsed_ms`
    Clamp { min_elapsed_ms: f64 },
    /// The touch pair is not a swipe
    Reject,
}

/// Gesture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum travel for a swipe
    pub swipe_threshold: f64,
    /// Hold time after which a touch is a long press
    pub long_press_ms: f64,
    /// Minimum velocity (px/ms) for swipe navigation
    pub min_swipe_velocity: f64,
    /// Viewport widths below this are treated as mobile
    pub mobile_breakpoint: f64,
    /// Handling of zero or negative elapsed time
    pub velocity_policy: VelocityPolicy,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            long_press_ms: 500.0,
            min_swipe_velocity: 0.5,
            mobile_breakpoint: 768.0,
            velocity_policy: VelocityPolicy::Infinite,
        }
    }
}

fn negative_or_nan(value: f64) -> bool {
    value.is_nan() || value < 0.0
}

impl GestureConfig {
    /// Long-press check against the configured hold time
    pub fn is_long_press(&self, start_ms: f64, now_ms: f64) -> bool {
        is_long_press(start_ms, now_ms, self.long_press_ms)
    }

    /// Mobile layout check against the configured breakpoint
    pub fn is_mobile(&self, width: f64) -> bool {
        is_mobile_viewport(width, self.mobile_breakpoint)
    }

    /// Describe the first out-of-range value, if any
    pub fn invalid_reason(&self) -> Option<String> {
        if negative_or_nan(self.swipe_threshold) {
            return Some(format!("swipe_threshold must be >= 0, got {}", self.swipe_threshold));
        }
        if negative_or_nan(self.long_press_ms) {
            return Some(format!("long_press_ms must be >= 0, got {}", self.long_press_ms));
        }
        if negative_or_nan(self.min_swipe_velocity) {
            return Some(format!(
                "min_swipe_velocity must be >= 0, got {}",
                self.min_swipe_velocity
            ));
        }
        if let VelocityPolicy::Clamp { min_elapsed_ms } = self.velocity_policy {
            if negative_or_nan(min_elapsed_ms) || min_elapsed_ms == 0.0 {
                return Some(format!("min_elapsed_ms must be > 0, got {}", min_elapsed_ms));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GestureConfig::default();
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.velocity_policy, VelocityPolicy::Infinite);
        assert!(config.invalid_reason().is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"min_swipe_velocity": 0.8, "velocity_policy": {"policy": "clamp", "min_elapsed_ms": 16}}"#;
        let config: GestureConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.min_swipe_velocity, 0.8);
        assert_eq!(config.long_press_ms, 500.0);
        assert_eq!(
            config.velocity_policy,
            VelocityPolicy::Clamp {
                min_elapsed_ms: 16.0
            }
        );
    }

    #[test]
    fn test_invalid_clamp_rejected() {
        let config = GestureConfig {
            velocity_policy: VelocityPolicy::Clamp {
                min_elapsed_ms: 0.0,
            },
            ..Default::default()
        };
        assert!(config.invalid_reason().is_some());
    }

    #[test]
    fn test_configured_thresholds() {
        let config = GestureConfig {
            long_press_ms: 300.0,
            mobile_breakpoint: 1024.0,
            ..Default::default()
        };

        assert!(config.is_long_press(1000.0, 1301.0));
        assert!(!config.is_long_press(1000.0, 1300.0));
        assert!(config.is_mobile(900.0));
        assert!(!GestureConfig::default().is_mobile(900.0));
    }
}
