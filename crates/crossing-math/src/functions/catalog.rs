//! Fixed catalog of analytic test curves.

use std::fmt;
use std::str::FromStr;

use crate::error::MathError;
use crate::functions::RealFunction;

/// An analytic curve with a closed-form derivative.
///
/// The first three variants are the curves whose pairwise crossings bound
/// the area computed by [`crate::area::enclosed_area`]. The remaining ones
/// form alternate test pairs:
///
/// - `LogQuadratic` against `Zero`
/// - `Sine` against `CosineSquare`
/// - `Exp` against `InverseCube`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// `e^x + 2`
    Exponential,
    /// `-2x + 8`
    Linear,
    /// `-5 / x`
    Hyperbola,
    /// `ln((1 + x^2) / 5)`
    LogQuadratic,
    /// `0`
    Zero,
    /// `sin x`
    Sine,
    /// `cos(x^2)`
    CosineSquare,
    /// `e^x`
    Exp,
    /// `9 / x^3`
    InverseCube,
}

impl Curve {
    /// Every curve in the catalog, in declaration order.
    pub const ALL: [Curve; 9] = [
        Curve::Exponential,
        Curve::Linear,
        Curve::Hyperbola,
        Curve::LogQuadratic,
        Curve::Zero,
        Curve::Sine,
        Curve::CosineSquare,
        Curve::Exp,
        Curve::InverseCube,
    ];

    /// Short identifier used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Exponential => "exponential",
            Curve::Linear => "linear",
            Curve::Hyperbola => "hyperbola",
            Curve::LogQuadratic => "log-quadratic",
            Curve::Zero => "zero",
            Curve::Sine => "sine",
            Curve::CosineSquare => "cosine-square",
            Curve::Exp => "exp",
            Curve::InverseCube => "inverse-cube",
        }
    }

    /// Closed form of the curve.
    pub fn formula(self) -> &'static str {
        match self {
            Curve::Exponential => "e^x + 2",
            Curve::Linear => "-2x + 8",
            Curve::Hyperbola => "-5/x",
            Curve::LogQuadratic => "ln((1 + x^2)/5)",
            Curve::Zero => "0",
            Curve::Sine => "sin(x)",
            Curve::CosineSquare => "cos(x^2)",
            Curve::Exp => "e^x",
            Curve::InverseCube => "9/x^3",
        }
    }

    /// Closed form of the derivative.
    pub fn derivative_formula(self) -> &'static str {
        match self {
            Curve::Exponential | Curve::Exp => "e^x",
            Curve::Linear => "-2",
            Curve::Hyperbola => "5/x^2",
            Curve::LogQuadratic => "2x/(1 + x^2)",
            Curve::Zero => "0",
            Curve::Sine => "cos(x)",
            Curve::CosineSquare => "-2x sin(x^2)",
            Curve::InverseCube => "-27/x^4",
        }
    }
}

impl RealFunction for Curve {
    fn value(&self, x: f64) -> f64 {
        match self {
            Curve::Exponential => x.exp() + 2.0,
            Curve::Linear => -2.0 * x + 8.0,
            Curve::Hyperbola => -5.0 / x,
            Curve::LogQuadratic => ((1.0 + x * x) / 5.0).ln(),
            Curve::Zero => 0.0,
            Curve::Sine => x.sin(),
            Curve::CosineSquare => (x * x).cos(),
            Curve::Exp => x.exp(),
            Curve::InverseCube => 9.0 / (x * x * x),
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match self {
            Curve::Exponential | Curve::Exp => x.exp(),
            Curve::Linear => -2.0,
            Curve::Hyperbola => 5.0 / (x * x),
            Curve::LogQuadratic => 2.0 * x / (1.0 + x * x),
            Curve::Zero => 0.0,
            Curve::Sine => x.cos(),
            Curve::CosineSquare => -(x * x).sin() * 2.0 * x,
            Curve::InverseCube => -27.0 / (x * x * x * x),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Curve::ALL
            .into_iter()
            .find(|curve| curve.name() == wanted)
            .ok_or_else(|| MathError::invalid_input(format!("unknown curve: {s}")))
    }
}
