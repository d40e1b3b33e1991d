//! Error types for root bracketing and quadrature.

use thiserror::Error;

/// A specialized Result type for crossing computations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while locating crossings or integrating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The bracket did not shrink below the tolerance within the iteration cap.
    #[error("Did not converge after {iterations} iterations (bracket width: {width:.2e})")]
    DidNotConverge {
        /// Number of iterations attempted.
        iterations: u64,
        /// Bracket width when the cap was reached.
        width: f64,
    },

    /// An endpoint update produced a non-finite value.
    ///
    /// Happens when a Newton step meets a zero derivative or a secant step
    /// meets equal function values at both endpoints.
    #[error("Numerical instability at iteration {iteration}: bracket became [{a}, {b}]")]
    NumericalInstability {
        /// Iteration on which the endpoint became non-finite.
        iteration: u64,
        /// Left endpoint after the update.
        a: f64,
        /// Right endpoint after the update.
        b: f64,
    },

    /// The segment-count estimator produced no usable grid.
    #[error(
        "Invalid precision or interval: [{a}, {b}] with precision {precision:.2e} yields {segments} segments"
    )]
    InvalidPrecisionOrInterval {
        /// Lower integration bound.
        a: f64,
        /// Upper integration bound.
        b: f64,
        /// Requested precision.
        precision: f64,
        /// Segment count returned by the estimator.
        segments: i64,
    },

    /// The fast inverse square root was asked for a non-positive or non-finite input.
    #[error("Singular input to fast inverse square root: {value}")]
    SingularApproximation {
        /// The rejected input.
        value: f32,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a did-not-converge error.
    #[must_use]
    pub fn did_not_converge(iterations: u64, width: f64) -> Self {
        Self::DidNotConverge { iterations, width }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
