//! DV01 (Dollar Value of 01) calculations.
//!
//! DV01 measures the absolute price change for a 1 basis point change in
//! yield.
//!
//! ## Formula
//!
//! ```text
//! DV01 = Modified Duration × Price × 0.0001
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::duration::{Duration, BASIS_POINT};
use crate::{RiskError, RiskResult};

/// DV01 value (price change per basis point)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DV01(Decimal);

impl DV01 {
    /// Create a new DV01 value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the DV01 value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Get the DV01 as f64
    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl std::fmt::Display for DV01 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<Decimal> for DV01 {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl TryFrom<f64> for DV01 {
    type Error = RiskError;

    fn try_from(value: f64) -> RiskResult<Self> {
        Decimal::from_f64_retain(value)
            .map(Self)
            .ok_or(RiskError::OutOfRange {
                quantity: "dv01",
                value,
            })
    }
}

/// Calculate DV01 from modified duration and price.
///
/// # Errors
///
/// `RiskError::OutOfRange` if the product is not representable.
pub fn dv01(modified: Duration, price: f64) -> RiskResult<DV01> {
    DV01::try_from(modified.as_f64() * price * BASIS_POINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dv01_from_duration() {
        let value = dv01(Duration::try_from(7.5).unwrap(), 98.0).unwrap();
        assert_relative_eq!(value.as_f64(), 0.0735, epsilon = 1e-12);
    }

    #[test]
    fn test_dv01_overflow() {
        let modified = Duration::try_from(7e28).unwrap();
        assert!(matches!(
            dv01(modified, 1e6),
            Err(RiskError::OutOfRange { quantity: "dv01", .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(DV01::new(dec!(0.07354)).to_string(), "0.0735");
    }
}
