//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings file could not be read or parsed.
    #[error("Configuration error in {}: {reason}", .path.display())]
    Config {
        /// Settings file path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Root tolerance is not a positive finite number.
    #[error("Invalid tolerance: {0}. Must be positive.")]
    InvalidTolerance(f64),

    /// Integral precision is not a positive finite number.
    #[error("Invalid precision: {0}. Must be positive.")]
    InvalidPrecision(f64),

    /// Iteration cap is zero.
    #[error("Invalid iteration cap: must be at least 1")]
    InvalidIterations,
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
