//! Area enclosed by the three catalog curves `e^x + 2`, `-2x + 8` and `-5/x`.
//!
//! The curves cross pairwise at three points `x1 < x2 < x3`. Between `x1`
//! and `x2` the region is bounded above by `-5/x`, between `x2` and `x3` by
//! `-2x + 8`; `e^x + 2` is the lower boundary throughout.

use log::debug;

use crate::error::MathResult;
use crate::functions::{Curve, RealFunction};
use crate::interval::Interval;
use crate::quadrature::{self, integrate};
use crate::solvers::{find_root, SolverConfig};

/// Tolerances for [`enclosed_area`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaConfig {
    /// Bracket solver settings.
    pub solver: SolverConfig,
    /// Midpoint-rule precision.
    pub precision: f64,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            precision: quadrature::DEFAULT_PRECISION,
        }
    }
}

/// A point where two curves meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Curve whose value is reported as `y`.
    pub first: Curve,
    /// The other curve.
    pub second: Curve,
    /// Abscissa of the crossing.
    pub x: f64,
    /// `first` evaluated at `x`.
    pub y: f64,
    /// Bracket updates spent locating `x`.
    pub iterations: u64,
}

/// Crossing points and area of the region bounded by the three curves.
#[derive(Debug, Clone, PartialEq)]
pub struct EnclosedArea {
    /// Crossings in increasing `x`.
    pub crossings: [Crossing; 3],
    /// `integral(-5/x - (e^x + 2))` over `[x1, x2]`.
    pub left: f64,
    /// `integral(-2x + 8 - (e^x + 2))` over `[x2, x3]`.
    pub right: f64,
}

impl EnclosedArea {
    /// Total enclosed area.
    pub fn total(&self) -> f64 {
        self.left + self.right
    }
}

/// Brackets for the three crossings, as `(upper, lower, bracket, reported)`.
const BRACKETS: [(Curve, Curve, (f64, f64), Curve); 3] = [
    (Curve::Hyperbola, Curve::Exponential, (-3.0, -2.0), Curve::Exponential),
    (Curve::Hyperbola, Curve::Linear, (-1.0, -0.25), Curve::Linear),
    (Curve::Linear, Curve::Exponential, (1.0, 2.0), Curve::Exponential),
];

/// Locates the three crossings and integrates the region between them.
///
/// # Example
///
/// ```rust
/// use crossing_math::area::{enclosed_area, AreaConfig};
///
/// let area = enclosed_area(&AreaConfig::default()).unwrap();
/// assert!((area.total() - 9.8069).abs() < 1e-3);
/// ```
pub fn enclosed_area(config: &AreaConfig) -> MathResult<EnclosedArea> {
    let [first, second, third] = BRACKETS;
    let crossings = [
        locate(first, &config.solver)?,
        locate(second, &config.solver)?,
        locate(third, &config.solver)?,
    ];
    let [x1, x2, x3] = crossings.map(|c| c.x);

    let left = integrate(&Curve::Hyperbola, &Curve::Exponential, x1, x2, config.precision)?;
    let right = integrate(&Curve::Linear, &Curve::Exponential, x2, x3, config.precision)?;
    debug!("enclosed area {left} + {right} between {x1}, {x2}, {x3}");

    Ok(EnclosedArea {
        crossings,
        left,
        right,
    })
}

fn locate(
    (f, g, (a, b), reported): (Curve, Curve, (f64, f64), Curve),
    config: &SolverConfig,
) -> MathResult<Crossing> {
    let bracket = Interval::ordered(a, b);
    let result = find_root(&f, &g, bracket.lo(), bracket.hi(), config)?;
    let other = if reported == f { g } else { f };

    Ok(Crossing {
        first: reported,
        second: other,
        x: result.root,
        y: reported.value(result.root),
        iterations: result.iterations,
    })
}
