//! Settings file support.
//!
//! Settings are read from an optional TOML file:
//!
//! ```toml
//! root_tolerance = 1e-6
//! integral_precision = 1e-4
//! max_iterations = 1000
//! format = "table"
//! ```
//!
//! Missing keys take their defaults; command-line flags override the file.

use std::fs;
use std::path::Path;

use crossing_math::quadrature::DEFAULT_PRECISION;
use crossing_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Tolerances and presentation defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Bracket half-width at which root searches stop.
    pub root_tolerance: f64,
    /// Precision used to size the midpoint-rule grid.
    pub integral_precision: f64,
    /// Iteration cap for root searches.
    pub max_iterations: u64,
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_tolerance: DEFAULT_TOLERANCE,
            integral_precision: DEFAULT_PRECISION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            format: OutputFormat::Table,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        debug!("loading settings from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&text).map_err(|reason| CliError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses settings from TOML text.
    pub fn parse(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e: toml::de::Error| e.message().to_string())
    }

    /// Applies command-line overrides and validates the result.
    pub fn with_overrides(
        mut self,
        root_tolerance: Option<f64>,
        integral_precision: Option<f64>,
        max_iterations: Option<u64>,
    ) -> CliResult<Self> {
        if let Some(tolerance) = root_tolerance {
            self.root_tolerance = tolerance;
        }
        if let Some(precision) = integral_precision {
            self.integral_precision = precision;
        }
        if let Some(cap) = max_iterations {
            self.max_iterations = cap;
        }
        self.validate()
    }

    /// Checks that every tolerance is usable.
    pub fn validate(self) -> CliResult<Self> {
        if !(self.root_tolerance.is_finite() && self.root_tolerance > 0.0) {
            return Err(CliError::InvalidTolerance(self.root_tolerance));
        }
        if !(self.integral_precision.is_finite() && self.integral_precision > 0.0) {
            return Err(CliError::InvalidPrecision(self.integral_precision));
        }
        if self.max_iterations == 0 {
            return Err(CliError::InvalidIterations);
        }
        Ok(self)
    }

    /// Solver configuration for root searches.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.root_tolerance, self.max_iterations)
    }
}
