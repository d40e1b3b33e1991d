//! Root bracketing for the crossing of two curves.
//!
//! This module provides the hybrid Newton/secant bracket solver:
//!
//! - [`find_root`]: shrinks a bracket around the root of `f(x) - g(x)`
//! - [`find_root_inspect`]: same, reporting every [`BracketStep`]
//!
//! Each endpoint moves on its own every iteration. The sign of `F * F''` at
//! the endpoint picks the update:
//!
//! | `F * F''` | Update | Moves toward |
//! |-----------|--------|--------------|
//! | `< 0` | Secant | the chord through both endpoints |
//! | `>= 0` | Newton | the tangent root at the endpoint |
//!
//! The loop ends when the bracket is no wider than `2 * tolerance`; there is
//! no residual test.
//!
//! # Example
//!
//! ```rust
//! use crossing_math::functions::Curve;
//! use crossing_math::solvers::{find_root, SolverConfig};
//!
//! // -5/x meets -2x + 8 where 2x^2 - 8x - 5 = 0
//! let result = find_root(
//!     &Curve::Hyperbola,
//!     &Curve::Linear,
//!     -1.0,
//!     -0.25,
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//!
//! let exact = (8.0 - 104.0_f64.sqrt()) / 4.0;
//! assert!((result.root - exact).abs() < 1e-6);
//! ```

mod bracket;

pub use bracket::{find_root, find_root_inspect};

/// Default bracket half-width tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for the bracket solver.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1000;

/// Configuration for the bracket solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Bracket half-width at which the solver stops. Also the step of the
    /// finite difference used for the second derivative.
    pub tolerance: f64,
    /// Maximum number of bracket updates.
    pub max_iterations: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u64) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a bracket solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// Midpoint of the final bracket.
    pub root: f64,
    /// Number of bracket updates performed.
    pub iterations: u64,
    /// `f(root) - g(root)`.
    pub residual: f64,
}

/// How an endpoint was moved during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointUpdate {
    /// Chord through both endpoints.
    Secant,
    /// Tangent at the endpoint.
    Newton,
}

/// State of the bracket after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketStep {
    /// 1-based iteration number.
    pub iteration: u64,
    /// Left endpoint after the update.
    pub a: f64,
    /// Right endpoint after the update.
    pub b: f64,
    /// Rule applied to `a`.
    pub a_update: EndpointUpdate,
    /// Rule applied to `b`.
    pub b_update: EndpointUpdate,
}

impl BracketStep {
    /// `|a - b|`.
    pub fn width(&self) -> f64 {
        (self.a - self.b).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config, SolverConfig::new(1e-6, 1000));
    }

    #[test]
    fn test_step_width() {
        let step = BracketStep {
            iteration: 1,
            a: 0.5,
            b: 0.25,
            a_update: EndpointUpdate::Secant,
            b_update: EndpointUpdate::Newton,
        };
        assert_eq!(step.width(), 0.25);
    }
}
