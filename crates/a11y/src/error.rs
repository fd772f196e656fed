//! Accessibility error types

use thiserror::Error;

/// Malformed `#RRGGBB` colour
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Expected 6 hex digits, got {0:?}")]
    InvalidLength(String),

    #[error("Invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// Key name with no [`Key`](crate::Key) counterpart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key name: {0:?}")]
pub struct UnknownKey(pub String);
