//! Hybrid Newton/secant bracket solver.
//!
//! Moves both ends of a bracket toward the root of `F(x) = f(x) - g(x)`,
//! picking a Newton or a secant update for each end from the local curvature.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::functions::{FunctionPair, RealFunction};
use crate::solvers::{BracketStep, EndpointUpdate, SolverConfig, SolverResult};

/// Finds the crossing of `f` and `g` inside the bracket `[a, b]`.
///
/// The bracket must contain exactly one root of `f(x) - g(x)`. Every
/// iteration moves `a` and then `b`:
///
/// 1. `F''` is estimated at the endpoint by a forward difference of `F'`
///    with step `config.tolerance`.
/// 2. If `F * F'' < 0` at the endpoint, a secant step toward the other
///    endpoint is taken, otherwise a Newton step.
///
/// The update of `b` uses the already-moved `a` (paired with the value of
/// `F` at the old `a`). This asymmetry is kept on purpose: updating both
/// ends from the old bracket gives different iterates.
///
/// The solver stops once `|a - b| <= 2 * config.tolerance` and returns the
/// midpoint. When `a == b` no iteration runs and `a` is returned.
///
/// # Arguments
///
/// * `f` - First curve
/// * `g` - Second curve
/// * `a` - One end of the bracket
/// * `b` - Other end of the bracket
/// * `config` - Solver configuration
///
/// # Errors
///
/// - [`MathError::InvalidInput`] for a non-positive tolerance, a zero
///   iteration cap or non-finite bounds
/// - [`MathError::NumericalInstability`] when an endpoint becomes non-finite
///   (zero derivative in a Newton step, equal values in a secant step)
/// - [`MathError::DidNotConverge`] when the iteration cap is reached
///
/// # Example
///
/// ```rust
/// use crossing_math::functions::Differentiable;
/// use crossing_math::solvers::{find_root, SolverConfig};
///
/// let parabola = Differentiable::new(|x: f64| x * x, |x: f64| 2.0 * x);
/// let one = Differentiable::new(|_: f64| 1.0, |_: f64| 0.0);
///
/// let result = find_root(&parabola, &one, 0.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 1.0).abs() < 1e-6);
/// ```
pub fn find_root<F, G>(
    f: &F,
    g: &G,
    a: f64,
    b: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    find_root_inspect(f, g, a, b, config, |_| {})
}

/// Like [`find_root`], calling `inspect` with the bracket after every iteration.
///
/// # Example
///
/// ```rust
/// use crossing_math::functions::Curve;
/// use crossing_math::solvers::{find_root_inspect, SolverConfig};
///
/// let mut widths = Vec::new();
/// let result = find_root_inspect(
///     &Curve::Linear,
///     &Curve::Exponential,
///     1.0,
///     2.0,
///     &SolverConfig::default(),
///     |step| widths.push(step.width()),
/// )
/// .unwrap();
///
/// assert_eq!(widths.len() as u64, result.iterations);
/// assert!(widths.windows(2).all(|w| w[1] <= w[0]));
/// ```
pub fn find_root_inspect<F, G, I>(
    f: &F,
    g: &G,
    mut a: f64,
    mut b: f64,
    config: &SolverConfig,
    mut inspect: I,
) -> MathResult<SolverResult>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
    I: FnMut(&BracketStep),
{
    validate(a, b, config)?;

    let pair = FunctionPair::new(f, g);
    let h = config.tolerance;
    let mut iterations = 0_u64;

    while (a - b).abs() > 2.0 * h {
        if iterations == config.max_iterations {
            let width = (a - b).abs();
            warn!("bracket solver stopped after {iterations} iterations, width {width:.2e}");
            return Err(MathError::did_not_converge(iterations, width));
        }
        iterations += 1;

        let fa = pair.difference(a);
        let fb = pair.difference(b);

        let (next_a, a_update) = move_endpoint(&pair, a, fa, b, fb, h);
        a = next_a;
        let (next_b, b_update) = move_endpoint(&pair, b, fb, a, fa, h);
        b = next_b;

        if !(a.is_finite() && b.is_finite()) {
            warn!("bracket became [{a}, {b}] at iteration {iterations}");
            return Err(MathError::NumericalInstability {
                iteration: iterations,
                a,
                b,
            });
        }

        let step = BracketStep {
            iteration: iterations,
            a,
            b,
            a_update,
            b_update,
        };
        trace!(
            "iteration {}: [{}, {}] ({:?}/{:?})",
            step.iteration,
            step.a,
            step.b,
            step.a_update,
            step.b_update
        );
        inspect(&step);
    }

    let root = (a + b) / 2.0;
    let residual = pair.difference(root);
    debug!("bracket solver converged to {root} in {iterations} iterations");

    Ok(SolverResult {
        root,
        iterations,
        residual,
    })
}

/// Moves endpoint `x` (with `F(x) = fx`) given the opposite endpoint and its value.
fn move_endpoint<F, G>(
    pair: &FunctionPair<'_, F, G>,
    x: f64,
    fx: f64,
    other: f64,
    f_other: f64,
    h: f64,
) -> (f64, EndpointUpdate)
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    if fx * pair.difference_curvature(x, h) < 0.0 {
        (x - fx * (x - other) / (fx - f_other), EndpointUpdate::Secant)
    } else {
        (x - fx / pair.difference_derivative(x), EndpointUpdate::Newton)
    }
}

fn validate(a: f64, b: f64, config: &SolverConfig) -> MathResult<()> {
    if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
        return Err(MathError::invalid_input(format!(
            "tolerance must be positive and finite, got {}",
            config.tolerance
        )));
    }
    if config.max_iterations == 0 {
        return Err(MathError::invalid_input("max_iterations must be at least 1"));
    }
    if !(a.is_finite() && b.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "bracket bounds must be finite, got [{a}, {b}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{Curve, Differentiable};
    use approx::assert_relative_eq;

    fn identity() -> Differentiable<fn(f64) -> f64, fn(f64) -> f64> {
        Differentiable::new(|x| x, |_| 1.0)
    }

    fn parabola() -> Differentiable<fn(f64) -> f64, fn(f64) -> f64> {
        Differentiable::new(|x| x * x, |x| 2.0 * x)
    }

    fn one() -> Differentiable<fn(f64) -> f64, fn(f64) -> f64> {
        Differentiable::new(|_| 1.0, |_| 0.0)
    }

    #[test]
    fn test_identity_against_zero() {
        let result = find_root(&identity(), &Curve::Zero, -1.0, 1.0, &SolverConfig::default())
            .unwrap();

        assert!(result.root.abs() < 1e-5);
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_parabola_against_one() {
        let mut steps = Vec::new();
        let result = find_root_inspect(
            &parabola(),
            &one(),
            0.0,
            2.0,
            &SolverConfig::default(),
            |step| steps.push(*step),
        )
        .unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-6);
        assert!(result.residual.abs() < 1e-6);
        assert_eq!(result.iterations, 4);

        // F(0) = -1 and F'' = 2 so `a` starts with a secant step; `b` is on
        // the convex side and takes Newton steps.
        assert_eq!(steps[0].a_update, EndpointUpdate::Secant);
        assert_eq!(steps[0].b_update, EndpointUpdate::Newton);
        assert_relative_eq!(steps[0].a, 0.5);
        assert_relative_eq!(steps[0].b, 1.25);
    }

    #[test]
    fn test_b_update_sees_moved_a() {
        // sin is convex left of 0 and concave right of it, so both ends take
        // secant steps. From [-1, 1] the first step moves `a` to 0; `b` then
        // interpolates between 1 and the new `a` and lands on 0.5 instead of 0.
        let mut first = None;
        let result = find_root_inspect(
            &Curve::Sine,
            &Curve::Zero,
            -1.0,
            1.0,
            &SolverConfig::default(),
            |step| {
                first.get_or_insert(*step);
            },
        )
        .unwrap();

        let first = first.unwrap();
        assert_eq!(first.a_update, EndpointUpdate::Secant);
        assert_eq!(first.b_update, EndpointUpdate::Secant);
        assert!(first.a.abs() < 1e-12);
        assert_relative_eq!(first.b, 0.5, epsilon = 1e-12);
        assert!(result.root.abs() < 1e-6);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_degenerate_bracket_returns_immediately() {
        let mut calls = 0;
        let result = find_root_inspect(
            &Curve::Sine,
            &Curve::CosineSquare,
            0.75,
            0.75,
            &SolverConfig::default(),
            |_| calls += 1,
        )
        .unwrap();

        assert_eq!(result.root, 0.75);
        assert_eq!(result.iterations, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_reversed_bracket() {
        let result =
            find_root(&parabola(), &one(), 2.0, 0.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_area_curves_cross_where_expected() {
        let config = SolverConfig::default();

        let x1 = find_root(&Curve::Hyperbola, &Curve::Exponential, -3.0, -2.0, &config).unwrap();
        let x2 = find_root(&Curve::Hyperbola, &Curve::Linear, -1.0, -0.25, &config).unwrap();
        let x3 = find_root(&Curve::Linear, &Curve::Exponential, 1.0, 2.0, &config).unwrap();

        assert_relative_eq!(x1.root, -2.390_536_703_9, epsilon = 1e-6);
        assert_relative_eq!(x2.root, -0.549_509_756_8, epsilon = 1e-6);
        assert_relative_eq!(x3.root, 1.251_757_931_5, epsilon = 1e-6);
        assert_eq!((x1.iterations, x2.iterations, x3.iterations), (4, 5, 4));
    }

    #[test]
    fn test_width_never_grows() {
        let config = SolverConfig::default();
        let pairs = [
            (Curve::Hyperbola, Curve::Exponential, -3.0_f64, -2.0_f64),
            (Curve::Hyperbola, Curve::Linear, -1.0, -0.25),
            (Curve::Linear, Curve::Exponential, 1.0, 2.0),
        ];

        for (f, g, a, b) in pairs {
            let mut width = (a - b).abs();
            find_root_inspect(&f, &g, a, b, &config, |step| {
                assert!(step.width() <= width);
                width = step.width();
            })
            .unwrap();
        }
    }

    #[test]
    fn test_iteration_cap() {
        let config = SolverConfig::default().with_max_iterations(1);
        let err = find_root(&parabola(), &one(), 0.0, 2.0, &config).unwrap_err();

        match err {
            MathError::DidNotConverge { iterations, width } => {
                assert_eq!(iterations, 1);
                assert_relative_eq!(width, 0.75);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_derivative_is_unstable() {
        // x^3 + 1 is flat at 0 with F * F'' > 0, so `b` takes a Newton step
        // through a zero derivative.
        let cubic = Differentiable::new(|x: f64| x * x * x + 1.0, |x: f64| 3.0 * x * x);
        let err = find_root(&cubic, &Curve::Zero, -2.0, 0.0, &SolverConfig::default())
            .unwrap_err();

        match err {
            MathError::NumericalInstability { iteration, a, b } => {
                assert_eq!(iteration, 1);
                assert!(a.is_finite());
                assert!(b.is_infinite());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_flat_secant_is_unstable() {
        // cos is even, so F(a) = F(b) and both secant steps divide by zero.
        let cosine = Differentiable::new(f64::cos, |x: f64| -x.sin());
        let err = find_root(&cosine, &Curve::Zero, -1.0, 1.0, &SolverConfig::default())
            .unwrap_err();

        match err {
            MathError::NumericalInstability { iteration, a, b } => {
                assert_eq!(iteration, 1);
                assert!(a.is_infinite());
                assert!(!b.is_finite());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_configuration() {
        let zero_tolerance = SolverConfig::default().with_tolerance(0.0);
        assert!(matches!(
            find_root(&Curve::Sine, &Curve::Zero, -1.0, 1.0, &zero_tolerance),
            Err(MathError::InvalidInput { .. })
        ));

        let no_iterations = SolverConfig::default().with_max_iterations(0);
        assert!(find_root(&Curve::Sine, &Curve::Zero, -1.0, 1.0, &no_iterations).is_err());

        assert!(
            find_root(&Curve::Sine, &Curve::Zero, f64::NAN, 1.0, &SolverConfig::default())
                .is_err()
        );
    }
}
