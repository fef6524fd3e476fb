//! Accrued interest under 30/360.
//!
//! # Example
//!
//! ```rust
//! use yieldsolve_bonds::cashflows::{accrued_interest, PriceBreakdown};
//! use yieldsolve_core::types::{Date, Frequency};
//!
//! let settlement = Date::from_ymd(2024, 3, 15).unwrap();
//! let maturity = Date::from_ymd(2029, 1, 15).unwrap();
//!
//! // 5% semiannual coupon on 100 face: 2.50 per period
//! let accrued = accrued_interest(settlement, maturity, 2.5, Frequency::SemiAnnual).unwrap();
//! let prices = PriceBreakdown::from_clean(98.0, accrued);
//!
//! assert!((accrued - 2.5 * 2.0 / 3.0).abs() < 1e-12);
//! assert!(prices.dirty > prices.clean);
//! ```

use serde::{Deserialize, Serialize};
use yieldsolve_core::daycounts::{DayCount, Thirty360};
use yieldsolve_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// Coupon accrued between the last coupon date and settlement.
///
/// Coupon dates are taken to fall on whole periods back from maturity, so
/// the fraction of the current period still to run is
/// `w = days_to_next / period_days`, with
/// `days_to_next = period_days - days(settlement, maturity) % period_days`.
/// The accrued amount is `coupon_per_period * (1 - w)`.
///
/// Settling exactly on a coupon date accrues nothing.
///
/// # Errors
///
/// Returns `BondError::InvalidSpec` if settlement falls after maturity.
pub fn accrued_interest(
    settlement: Date,
    maturity: Date,
    coupon_per_period: f64,
    frequency: Frequency,
) -> BondResult<f64> {
    let days = Thirty360.day_count(settlement, maturity);
    if days < 0 {
        return Err(BondError::invalid_spec(format!(
            "settlement {settlement} is after maturity {maturity}"
        )));
    }

    let period_days = frequency.days_per_period();
    let days_to_next = period_days - days % period_days;
    let w = days_to_next as f64 / period_days as f64;

    Ok(coupon_per_period * (1.0 - w))
}

/// Clean price, accrued interest and the resulting dirty price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Quoted price, excluding accrued interest.
    pub clean: f64,
    /// Accrued interest.
    pub accrued: f64,
    /// `clean + accrued`.
    pub dirty: f64,
}

impl PriceBreakdown {
    /// Builds the breakdown from a clean price and accrued interest.
    #[must_use]
    pub fn from_clean(clean: f64, accrued: f64) -> Self {
        Self {
            clean,
            accrued,
            dirty: clean + accrued,
        }
    }
}
