//! CLI command implementations.

pub mod area;
pub mod curves;
pub mod integral;
pub mod root;

// Re-export argument types for the parser
pub use area::AreaArgs;
pub use curves::CurvesArgs;
pub use integral::IntegralArgs;
pub use root::RootArgs;

use crossing_math::functions::Curve;

/// Display label for a pair of curves, e.g. `linear vs exponential`.
pub fn pair_label(f: Curve, g: Curve) -> String {
    format!("{} vs {}", f, g)
}
