//! Differentiable real functions and the pairs the solvers compare.
//!
//! The solvers never look at closed forms. They see a curve only through
//! [`RealFunction`], which yields a value and a first derivative at a point.
//!
//! - [`Differentiable`]: wraps a value closure and a derivative closure
//! - [`FunctionPair`]: borrows two curves and exposes their difference
//! - [`Curve`]: the fixed catalog of analytic test curves
//!
//! # Example
//!
//! ```rust
//! use crossing_math::functions::{Differentiable, FunctionPair, RealFunction};
//!
//! let parabola = Differentiable::new(|x: f64| x * x, |x: f64| 2.0 * x);
//! let one = Differentiable::new(|_: f64| 1.0, |_: f64| 0.0);
//!
//! let pair = FunctionPair::new(&parabola, &one);
//! assert_eq!(pair.difference(2.0), 3.0);
//! assert_eq!(pair.difference_derivative(2.0), 4.0);
//! ```

mod catalog;

pub use catalog::Curve;

/// A real function of one variable with a known first derivative.
///
/// Implementations should be side-effect free. Non-finite results are
/// allowed and propagate through the solver arithmetic.
pub trait RealFunction {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates the first derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

impl<T: RealFunction + ?Sized> RealFunction for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

/// A [`RealFunction`] built from a value closure and a derivative closure.
#[derive(Debug, Clone, Copy)]
pub struct Differentiable<F, D> {
    f: F,
    df: D,
}

impl<F, D> Differentiable<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a function from its value and derivative.
    #[must_use]
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> RealFunction for Differentiable<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// Two borrowed curves `f` and `g`, compared through `F(x) = f(x) - g(x)`.
#[derive(Debug, Clone, Copy)]
pub struct FunctionPair<'a, F: ?Sized, G: ?Sized> {
    f: &'a F,
    g: &'a G,
}

impl<'a, F, G> FunctionPair<'a, F, G>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    /// Pairs two curves.
    #[must_use]
    pub fn new(f: &'a F, g: &'a G) -> Self {
        Self { f, g }
    }

    /// `f(x) - g(x)`.
    #[inline]
    pub fn difference(&self, x: f64) -> f64 {
        self.f.value(x) - self.g.value(x)
    }

    /// `f'(x) - g'(x)`.
    #[inline]
    pub fn difference_derivative(&self, x: f64) -> f64 {
        self.f.derivative(x) - self.g.derivative(x)
    }

    /// Forward-difference estimate of `F''(x)` with step `h`.
    #[inline]
    pub fn difference_curvature(&self, x: f64, h: f64) -> f64 {
        (self.difference_derivative(x + h) - self.difference_derivative(x)) / h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_differentiable_closures() {
        let cubic = Differentiable::new(|x: f64| x * x * x, |x: f64| 3.0 * x * x);

        assert_relative_eq!(cubic.value(2.0), 8.0);
        assert_relative_eq!(cubic.derivative(2.0), 12.0);
    }

    #[test]
    fn test_pair_difference() {
        let line = Differentiable::new(|x: f64| 2.0 * x + 1.0, |_: f64| 2.0);
        let parabola = Differentiable::new(|x: f64| x * x, |x: f64| 2.0 * x);
        let pair = FunctionPair::new(&line, &parabola);

        assert_relative_eq!(pair.difference(3.0), -2.0);
        assert_relative_eq!(pair.difference_derivative(3.0), -4.0);
        assert_relative_eq!(FunctionPair::new(&parabola, &line).difference(3.0), 2.0);
    }

    #[test]
    fn test_curvature_of_parabola() {
        let parabola = Differentiable::new(|x: f64| x * x, |x: f64| 2.0 * x);
        let zero = Curve::Zero;
        let pair = FunctionPair::new(&parabola, &zero);

        assert_relative_eq!(pair.difference_curvature(0.7, 1e-6), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_trait_objects_pair() {
        let sine: &dyn RealFunction = &Curve::Sine;
        let zero: &dyn RealFunction = &Curve::Zero;
        let pair = FunctionPair::new(sine, zero);

        assert_relative_eq!(pair.difference(0.0), 0.0);
        assert_relative_eq!(pair.difference_derivative(0.0), 1.0);
    }
}
