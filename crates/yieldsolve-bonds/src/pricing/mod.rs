//! Rate solving on top of discounted-cash-flow valuation.
//!
//! This module provides:
//! - [`ValuationFunction`]: `f(rate) = PV(rate) - target` plus its derivative
//! - [`IrrCalculator`]: internal rate of return of a cash-flow schedule
//! - [`YieldSolver`]: yield to maturity of a [`FixedRateBond`](crate::instruments::FixedRateBond)

mod irr;
mod valuation;
mod yield_solver;

pub use irr::{IrrCalculator, IrrResult};
pub use valuation::{BondPriceFunction, ScheduleValuation, ValuationFunction};
pub use yield_solver::{YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS};
