//! # yieldsolve Math
//!
//! Root-finding for the yieldsolve rate and duration library.
//!
//! This crate provides:
//!
//! - **Bisection**: bracketing solver that halves `[low, high]` until it is
//!   narrower than the tolerance
//! - **Newton-Raphson**: derivative-based solver with a mandatory iteration cap
//! - **Finite differences**: forward and central derivative estimates
//! - **Sign-change scan**: coarse sampling that locates brackets, or proves
//!   there is no sign change in a range
//!
//! Every failure is an explicit [`MathError`]; no solver returns a
//! placeholder number in place of a root.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult, NonConvergenceCause};
    pub use crate::solvers::{
        bisection, newton_raphson, newton_raphson_numerical, sample, scan_sign_changes,
        try_bisection, try_newton_raphson, BisectionSolver, Bracket, FiniteDifference,
        NewtonSolver, Solver, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult, NonConvergenceCause};
