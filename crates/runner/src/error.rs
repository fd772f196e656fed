//! Error types for the scenario runner

use thiserror::Error;

/// Dashboard configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Scenario runner errors
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read scenario file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse scenario: {0}")]
    Parse(String),

    #[error("Failed to write results: {0}")]
    Output(String),

    #[error("Usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
