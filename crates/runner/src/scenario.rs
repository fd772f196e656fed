//! Scenario evaluation
//!
//! A scenario is a JSON array of tagged requests. Each request is evaluated
//! independently and yields one tagged outcome, in the same order:
//!
//! ```json
//! [
//!   { "type": "risk_reward", "entry_price": "100", "stop_price": "90", "target_price": "120" },
//!   { "type": "navigate", "key": "ArrowDown", "current": 4, "len": 5 }
//! ]
//! ```

use log::{debug, info};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tradedeck_a11y::{Key, contrast_ratio, meets_wcag_aa, navigate};
use tradedeck_core::{
    Liquidity, OrderEvent, OrderStatus, Price, Quantity, TimeInForce, Timestamp,
};
use tradedeck_gesture::{PinchEvent, SwipeDetector, SwipeEvent, TouchPoint, calculate_pinch_scale};
use tradedeck_metrics::{
    FillEstimate, FillEstimateInputs, MarketSession, RiskReward, RiskRewardInputs, SessionStatus,
};
use tradedeck_ports::Clock;
use tradedeck_timeline::{OrderTimeline, TimelineStep, project_order_status_path};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::error::{Result, RunnerError};

/// One calculation to perform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Swipe {
        start: TouchPoint,
        end: TouchPoint,
        elapsed_ms: f64,
    },
    Pinch {
        a: TouchPoint,
        b: TouchPoint,
    },
    RiskReward(RiskRewardInputs),
    FillEstimate {
        order_size: Quantity,
        current_price: Price,
        spread_width: Price,
        liquidity: Liquidity,
        /// Taken from the clock and market hours when absent
        #[serde(default)]
        is_market_hours: Option<bool>,
        #[serde(default)]
        base_estimate_seconds: Option<Decimal>,
    },
    OrderPath {
        status: OrderStatus,
    },
    OrderEvents {
        events: Vec<OrderEvent>,
        #[serde(default)]
        time_in_force: Option<TimeInForce>,
    },
    Contrast {
        foreground: String,
        background: String,
        #[serde(default)]
        large_text: bool,
    },
    Navigate {
        key: Key,
        current: usize,
        len: usize,
    },
    MarketStatus {
        /// Evaluated at the clock's time when absent
        #[serde(default)]
        at: Option<Timestamp>,
    },
}

/// Result of one request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Swipe {
        swipe: Option<SwipeEvent>,
    },
    Pinch(PinchEvent),
    RiskReward(RiskReward),
    FillEstimate {
        #[serde(flatten)]
        estimate: FillEstimate,
        display: String,
    },
    OrderPath {
        steps: Vec<TimelineStep>,
    },
    OrderEvents {
        current_status: Option<OrderStatus>,
        steps: Vec<TimelineStep>,
    },
    Contrast {
        ratio: f64,
        passes_aa: bool,
    },
    Navigate {
        index: Option<usize>,
    },
    MarketStatus {
        session: MarketSession,
        label: &'static str,
        seconds_until_change: i64,
        countdown: String,
    },
}

/// Parse a scenario from a JSON string
pub fn parse_scenario(json: &str) -> Result<Vec<Request>> {
    serde_json::from_str(json).map_err(|e| RunnerError::Parse(e.to_string()))
}

/// Load a scenario from a JSON file
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Vec<Request>> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| RunnerError::Io {
        path: path.as_ref().display().to_string(),
        error: e.to_string(),
    })?;

    parse_scenario(&content)
}

/// Evaluates requests against one configuration and clock
pub struct ScenarioRunner<C: Clock> {
    config: DashboardConfig,
    clock: C,
    swipe_detector: SwipeDetector,
}

impl<C: Clock> ScenarioRunner<C> {
    pub fn new(config: DashboardConfig, clock: C) -> Self {
        let swipe_detector = SwipeDetector::from_config(&config.gesture);
        Self {
            config,
            clock,
            swipe_detector,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn run(&self, requests: &[Request]) -> Vec<Outcome> {
        info!(
            "Running {} request(s), clock={} at {}",
            requests.len(),
            self.clock.name(),
            self.clock.now()
        );
        requests.iter().map(|request| self.evaluate(request)).collect()
    }

    pub fn evaluate(&self, request: &Request) -> Outcome {
        debug!("Evaluating {:?}", request);

        match request {
            Request::Swipe {
                start,
                end,
                elapsed_ms,
            } => Outcome::Swipe {
                swipe: self.swipe_detector.detect(*start, *end, *elapsed_ms),
            },

            Request::Pinch { a, b } => Outcome::Pinch(calculate_pinch_scale(*a, *b)),

            Request::RiskReward(inputs) => Outcome::RiskReward(inputs.compute()),

            Request::FillEstimate {
                order_size,
                current_price,
                spread_width,
                liquidity,
                is_market_hours,
                base_estimate_seconds,
            } => {
                let is_market_hours = is_market_hours
                    .unwrap_or_else(|| self.config.market_hours.is_market_hours(&self.clock));
                let inputs = FillEstimateInputs {
                    order_size: *order_size,
                    current_price: *current_price,
                    spread_width: *spread_width,
                    liquidity: *liquidity,
                    is_market_hours,
                    base_estimate_seconds: *base_estimate_seconds,
                };
                let estimate = inputs.estimate_with(&self.config.fill_estimate);
                let display = estimate.display();
                Outcome::FillEstimate { estimate, display }
            }

            Request::OrderPath { status } => Outcome::OrderPath {
                steps: project_order_status_path(*status),
            },

            Request::OrderEvents {
                events,
                time_in_force,
            } => {
                let mut timeline = OrderTimeline::new(Uuid::new_v4());
                if let Some(tif) = time_in_force {
                    timeline = timeline.with_time_in_force(*tif);
                }
                for event in events {
                    timeline.record(event.clone());
                }
                Outcome::OrderEvents {
                    current_status: timeline.current_status(),
                    steps: timeline.path(),
                }
            }

            Request::Contrast {
                foreground,
                background,
                large_text,
            } => {
                let ratio = contrast_ratio(foreground, background);
                Outcome::Contrast {
                    ratio,
                    passes_aa: meets_wcag_aa(ratio, *large_text),
                }
            }

            Request::Navigate { key, current, len } => Outcome::Navigate {
                index: navigate(*key, *current, *len),
            },

            Request::MarketStatus { at } => {
                let status: SessionStatus = match at {
                    Some(at) => self.config.market_hours.status_at(*at),
                    None => self.config.market_hours.status_now(&self.clock),
                };
                Outcome::MarketStatus {
                    session: status.session,
                    label: status.session.label(),
                    seconds_until_change: status.seconds_until_change,
                    countdown: status.countdown(),
                }
            }
        }
    }
}
