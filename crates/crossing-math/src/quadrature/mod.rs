//! Numerical integration of the signed area between two curves.
//!
//! - [`integrate`]: composite midpoint rule over `[a, b]`
//! - [`integrate_with_grid`]: the same, also returning the grid size
//! - [`segment_count`]: grid size for a target precision
//! - [`fast_inv_sqrt`]: the bit-level `1/sqrt(x)` approximation used for sizing
//!
//! With `n = (b - a)^2 / sqrt(24 e)` the midpoint error bound
//! `(b - a)^3 max|F''| / (24 n^2)` comes out near `e max|F''| / (b - a)`.

mod midpoint;
mod segments;

pub use midpoint::{integrate, integrate_with_grid, MidpointResult};
pub use segments::{fast_inv_sqrt, segment_count};

/// Default precision for [`integrate`].
pub const DEFAULT_PRECISION: f64 = 1e-4;
