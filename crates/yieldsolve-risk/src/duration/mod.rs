//! Duration calculations for level-coupon bonds.
//!
//! - **Macaulay Duration**: PV-weighted average time to the cash flows,
//!   scaled by the market price
//! - **Modified Duration**: Macaulay duration over `(1 + yield)`

mod macaulay;
mod modified;

pub use macaulay::*;
pub use modified::*;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{RiskError, RiskResult};

/// Duration value, in coupon periods (years for annual-pay bonds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Duration(Decimal);

impl Duration {
    /// Create a new Duration value
    pub fn new(periods: Decimal) -> Self {
        Self(periods)
    }

    /// Get the duration in periods
    pub fn periods(&self) -> Decimal {
        self.0
    }

    /// Get the duration as f64
    pub fn as_f64(&self) -> f64 {
        // Decimal's range lies inside f64's
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} periods", self.0)
    }
}

impl From<Decimal> for Duration {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl TryFrom<f64> for Duration {
    type Error = RiskError;

    /// Fails for non-finite values and magnitudes beyond `Decimal::MAX`.
    fn try_from(periods: f64) -> RiskResult<Self> {
        Decimal::from_f64_retain(periods)
            .map(Self)
            .ok_or(RiskError::OutOfRange {
                quantity: "duration",
                value: periods,
            })
    }
}
