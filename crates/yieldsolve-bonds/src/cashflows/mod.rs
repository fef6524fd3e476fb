//! Cash-flow valuation.
//!
//! - [`present_value`]: `PV = Σ amount_t / (1 + rate)^t` over a schedule
//! - [`present_value_derivative`]: the analytic `dPV/drate`
//! - [`accrued_interest`]: 30/360 accrual since the last coupon

mod accrued;
mod discounting;

pub use accrued::{accrued_interest, PriceBreakdown};
pub use discounting::{
    discount_factor, present_value, present_value_derivative, validate_rate,
};
