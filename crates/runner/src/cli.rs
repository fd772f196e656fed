//! Command-line arguments

use crate::error::{Result, RunnerError};

pub const USAGE: &str = r#"Tradedeck - dashboard calculation runner

USAGE:
    tradedeck <SCENARIO> [OPTIONS]

ARGS:
    <SCENARIO>          JSON array of requests to evaluate

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Evaluate a scenario with default configuration
    tradedeck scenario.json

    # Evaluate with custom gesture and market hours
    tradedeck scenario.json --config dashboard.json
"#;

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run {
        scenario_path: String,
        config_path: Option<String>,
    },
}

/// Parse arguments, excluding the program name
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut args = args.into_iter();
    let mut scenario_path: Option<String> = None;
    let mut config_path: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| RunnerError::Usage("--config requires a path argument".into()))?;
                config_path = Some(path);
            }
            flag if flag.starts_with('-') => {
                return Err(RunnerError::Usage(format!("unknown argument: {}", flag)));
            }
            _ if scenario_path.is_some() => {
                return Err(RunnerError::Usage(format!("unexpected argument: {}", arg)));
            }
            _ => scenario_path = Some(arg),
        }
    }

    let scenario_path =
        scenario_path.ok_or_else(|| RunnerError::Usage("missing scenario file".into()))?;

    Ok(Command::Run {
        scenario_path,
        config_path,
    })
}
