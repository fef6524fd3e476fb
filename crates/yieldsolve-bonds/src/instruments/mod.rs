//! Instrument definitions.
//!
//! - [`Bond`]: the annual-coupon record the duration engine consumes
//! - [`FixedRateBond`]: a level-coupon bond priced from an annual yield

mod bond;
mod fixed_rate;

pub use bond::Bond;
pub use fixed_rate::FixedRateBond;
