//! Domain types for cash-flow valuation.
//!
//! - [`Date`]: Calendar date used for period counting
//! - [`Frequency`]: Compounding periods per year
//! - [`CashFlow`]: Amount paid or received at a whole-period offset
//! - [`CashFlowSchedule`]: Validated, ordered set of cash flows with a frequency

mod cashflow;
mod date;
mod frequency;

pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use date::Date;
pub use frequency::Frequency;
