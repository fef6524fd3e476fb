//! # yieldsolve Bonds
//!
//! Discounted-cash-flow valuation and the rate solvers built on it.
//!
//! This crate provides:
//!
//! - **Cash Flows**: present value and its rate derivative, accrued interest
//! - **Instruments**: the duration [`Bond`](instruments::Bond) record and
//!   the level-coupon [`FixedRateBond`](instruments::FixedRateBond)
//! - **Pricing**: valuation adapters, the IRR calculator and the
//!   yield-to-maturity solver
//!
//! ## Example
//!
//! ```rust
//! use yieldsolve_bonds::prelude::*;
//! use yieldsolve_core::types::Frequency;
//!
//! // 5% semiannual coupon, 10 periods, trading at 95
//! let bond = FixedRateBond::new(100.0, 0.05, Frequency::SemiAnnual, 10).unwrap();
//! let ytm = YieldSolver::new().solve(&bond, 95.0).unwrap();
//!
//! assert!(ytm.yield_value > 0.05);
//! println!("YTM: {:.4}%", ytm.as_percent());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{
        accrued_interest, discount_factor, present_value, present_value_derivative,
        PriceBreakdown,
    };

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{Bond, FixedRateBond};

    // Pricing
    pub use crate::pricing::{
        BondPriceFunction, IrrCalculator, IrrResult, ScheduleValuation, ValuationFunction,
        YieldResult, YieldSolver,
    };
}

pub use error::{BondError, BondResult};
