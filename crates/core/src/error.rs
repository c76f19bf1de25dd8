//! Error types for U-CutStock.

use thiserror::Error;

/// Result type alias for U-CutStock operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during cutting-stock optimization.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any packing was attempted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The available stock cannot hold every required cut.
    #[error("Cannot fit all cuts: {0}")]
    InfeasiblePacking(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true for errors raised by input validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Returns true when the stock supply was insufficient.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Error::InfeasiblePacking(_))
    }
}
