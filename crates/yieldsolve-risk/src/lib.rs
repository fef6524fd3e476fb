//! # yieldsolve-risk
//!
//! Duration analytics for level-coupon bonds.
//!
//! This crate provides:
//!
//! - **Duration**: Macaulay and modified duration
//! - **Sensitivity**: price change per basis point, DV01
//! - **Scenarios**: duration at the stated yield, at zero and under a
//!   parallel yield shock, bundled as a [`DurationProfile`](scenarios::DurationProfile)
//! - **Batch**: [`DurationCalculator`](calculator::DurationCalculator) for
//!   any number of bond records
//!
//! ## Example
//!
//! ```rust
//! use yieldsolve_bonds::instruments::Bond;
//! use yieldsolve_risk::prelude::*;
//!
//! let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
//!
//! let macaulay = macaulay_duration(&bond, bond.yield_rate).unwrap();
//! let modified = modified_duration(macaulay, bond.yield_rate).unwrap();
//!
//! assert!((macaulay.as_f64() - 8.1078).abs() < 1e-4);
//! println!("Price change per bp: {:.6}", bp_price_change(modified));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]

pub mod calculator;
pub mod duration;
pub mod dv01;
mod error;
pub mod scenarios;

pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::DurationCalculator;
    pub use crate::duration::*;
    pub use crate::dv01::*;
    pub use crate::scenarios::*;
    pub use crate::{RiskError, RiskResult};
}
