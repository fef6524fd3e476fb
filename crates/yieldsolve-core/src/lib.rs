//! # yieldsolve Core
//!
//! Core types shared by the yieldsolve rate and duration solvers.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Types**: [`Date`](types::Date), [`Frequency`](types::Frequency),
//!   [`CashFlow`](types::CashFlow) and [`CashFlowSchedule`](types::CashFlowSchedule)
//! - **Day Count**: the 30/360 convention used to turn two calendar dates
//!   into whole compounding periods
//!
//! ## Example
//!
//! ```rust
//! use yieldsolve_core::prelude::*;
//!
//! // An investment of 100 returning 107 one year later
//! let schedule = CashFlowSchedule::from_initial_and_flows(-100.0, &[107.0], Frequency::Annual)
//!     .unwrap();
//! assert_eq!(schedule.len(), 2);
//! assert!((schedule.total() - 7.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{periods_between, DayCount, Thirty360};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, CashFlowType, Date, Frequency};
}

pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSchedule, Date, Frequency};
