//! Closed real intervals.

use std::fmt;

/// A closed interval `[lo, hi]` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// Builds an interval from two bounds given in any order.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        let (mut lo, mut hi) = (a, b);
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        Self { lo, hi }
    }

    /// Lower bound.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_swaps_reversed_bounds() {
        let interval = Interval::ordered(2.0, -1.0);
        assert_eq!(interval.lo(), -1.0);
        assert_eq!(interval.hi(), 2.0);
    }

    #[test]
    fn test_ordered_keeps_sorted_bounds() {
        let interval = Interval::ordered(-3.0, -2.0);
        assert_eq!(interval.lo(), -3.0);
        assert_eq!(interval.hi(), -2.0);
        assert_eq!(interval.to_string(), "[-3, -2]");
    }
}
