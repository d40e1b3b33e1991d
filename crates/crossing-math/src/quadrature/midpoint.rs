//! Composite midpoint rule.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::functions::{FunctionPair, RealFunction};
use crate::quadrature::segment_count;

/// Integrates `f(x) - g(x)` over `[a, b]` with the composite midpoint rule.
///
/// The grid size `n` comes from [`segment_count`] at precision `precision`.
/// The integrand is sampled at `a + (b - a) k / 2n` for odd `k` in
/// `1..2n`, i.e. at the midpoint of each of the `n` equal sub-intervals,
/// and the sum is scaled by `(b - a) / n`.
///
/// Swapping `a` and `b` negates the result.
///
/// # Errors
///
/// - [`MathError::SingularApproximation`] if `24 * precision` is not a
///   positive finite single-precision value
/// - [`MathError::InvalidPrecisionOrInterval`] if the estimated grid has no
///   segments (for example `a == b` or an interval that is too short for
///   the precision)
///
/// # Example
///
/// ```rust
/// use crossing_math::functions::Curve;
/// use crossing_math::quadrature::integrate;
///
/// // Area between e^x + 2 and the x axis on [0, 1] is e + 1
/// let area = integrate(&Curve::Exponential, &Curve::Zero, 0.0, 1.0, 1e-6).unwrap();
/// assert!((area - (std::f64::consts::E + 1.0)).abs() < 1e-4);
/// ```
pub fn integrate<F, G>(f: &F, g: &G, a: f64, b: f64, precision: f64) -> MathResult<f64>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    integrate_with_grid(f, g, a, b, precision).map(|result| result.integral)
}

/// Result of a midpoint-rule integration together with its grid size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointResult {
    /// Signed integral of `f - g`.
    pub integral: f64,
    /// Number of sub-intervals used.
    pub segments: i64,
}

/// Same as [`integrate`], also reporting the number of segments.
///
/// # Errors
///
/// As [`integrate`]. A grid whose `2n` sample index does not fit in `i64`
/// is rejected with [`MathError::InvalidPrecisionOrInterval`].
pub fn integrate_with_grid<F, G>(
    f: &F,
    g: &G,
    a: f64,
    b: f64,
    precision: f64,
) -> MathResult<MidpointResult>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    let n = segment_count(a, b, precision)?;
    let invalid = MathError::InvalidPrecisionOrInterval {
        a,
        b,
        precision,
        segments: n,
    };
    if n <= 0 {
        return Err(invalid);
    }
    let Some(samples) = n.checked_mul(2) else {
        return Err(invalid);
    };

    let pair = FunctionPair::new(f, g);
    let width = b - a;
    let half_steps = samples as f64;

    let sum: f64 = (1..samples)
        .step_by(2)
        .map(|k| pair.difference(a + width * k as f64 / half_steps))
        .sum();

    debug!("midpoint rule on [{a}, {b}] with {n} segments");

    Ok(MidpointResult {
        integral: sum * width / n as f64,
        segments: n,
    })
}
