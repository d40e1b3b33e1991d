//! # Crossing Math
//!
//! Crossing points of pairs of real curves and the signed area between them.
//!
//! This crate provides:
//!
//! - **Functions**: the [`RealFunction`](functions::RealFunction) contract,
//!   curve pairs and a catalog of analytic test curves
//! - **Solvers**: a hybrid Newton/secant bracket solver
//! - **Quadrature**: a composite midpoint rule sized by a fast inverse
//!   square root
//! - **Area**: the region enclosed by three catalog curves
//!
//! ## Design Philosophy
//!
//! - **Reproducible**: iterates match the reference algorithm step for step,
//!   including its single-precision grid sizing
//! - **Bounded**: every loop has an iteration cap and failures are reported
//!   as [`MathError`] values instead of NaN
//! - **Generic**: curves are any type implementing `RealFunction`, closures
//!   included

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod area;
pub mod error;
pub mod functions;
pub mod interval;
pub mod quadrature;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::area::{enclosed_area, AreaConfig, Crossing, EnclosedArea};
    pub use crate::error::{MathError, MathResult};
    pub use crate::functions::{Curve, Differentiable, FunctionPair, RealFunction};
    pub use crate::interval::Interval;
    pub use crate::quadrature::{
        fast_inv_sqrt, integrate, integrate_with_grid, segment_count, MidpointResult,
    };
    pub use crate::solvers::{
        find_root, find_root_inspect, BracketStep, EndpointUpdate, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
