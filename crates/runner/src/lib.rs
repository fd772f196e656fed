//! Tradedeck Runner - Dashboard Calculation Scenarios
//!
//! Drives every calculation crate from JSON, for fixtures and offline checks:
//!
//! - **Config**: gesture tuning, fill estimate base, market hours
//! - **Scenario**: tagged requests in, tagged outcomes out
//! - **CLI**: `tradedeck <scenario.json> [--config <config.json>]`
//!
//! ## Architecture
//!
//! ```text
//!  scenario.json ──► Request[] ──► ┌──────────────────────────┐
//!                                  │      ScenarioRunner      │
//!  config.json ──► DashboardConfig │  gesture   metrics       │ ──► Outcome[] ──► stdout
//!                                  │  timeline  a11y          │
//!  Clock ─────────────────────────►│                          │
//!                                  └──────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod scenario;

// Re-export main types
pub use cli::{Command, USAGE, parse_args};
pub use config::DashboardConfig;
pub use error::{ConfigError, Result, RunnerError};
pub use scenario::{Outcome, Request, ScenarioRunner, load_scenario, parse_scenario};

use log::info;
use tradedeck_ports::Clock;

/// Load config and scenario, evaluate, and render outcomes as pretty JSON
pub fn run_files<C: Clock>(
    scenario_path: &str,
    config_path: Option<&str>,
    clock: C,
) -> Result<String> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            DashboardConfig::from_file(path)?
        }
        None => {
            info!("Using default configuration");
            DashboardConfig::default()
        }
    };

    let requests = load_scenario(scenario_path)?;
    let outcomes = ScenarioRunner::new(config, clock).run(&requests);

    serde_json::to_string_pretty(&outcomes).map_err(|e| RunnerError::Output(e.to_string()))
}
