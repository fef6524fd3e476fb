//! Level-coupon bond priced from an annual yield.

use serde::{Deserialize, Serialize};
use yieldsolve_core::daycounts::periods_between;
use yieldsolve_core::types::{CashFlowSchedule, Date, Frequency};
use yieldsolve_core::CoreError;

use crate::cashflows::validate_rate;
use crate::error::{BondError, BondResult};

/// A fixed-rate bond with a whole number of coupon periods remaining.
///
/// The coupon rate and any yield are annual decimals; both are divided
/// by the frequency to get per-period figures.
///
/// # Example
///
/// ```rust
/// use yieldsolve_bonds::instruments::FixedRateBond;
/// use yieldsolve_core::types::Frequency;
///
/// let bond = FixedRateBond::new(100.0, 0.05, Frequency::SemiAnnual, 10).unwrap();
/// assert!((bond.coupon_per_period() - 2.5).abs() < 1e-12);
/// assert!((bond.price_from_yield(0.05).unwrap() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedRateBond {
    face_value: f64,
    coupon_rate: f64,
    frequency: Frequency,
    periods: u32,
}

impl FixedRateBond {
    /// Creates a bond with `periods` coupons left to pay.
    ///
    /// # Errors
    ///
    /// * `BondError::Core(DegenerateSchedule)` if `periods` is 0
    /// * `BondError::InvalidSpec` for a non-finite coupon rate or a
    ///   non-positive face value
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        frequency: Frequency,
        periods: u32,
    ) -> BondResult<Self> {
        if periods == 0 {
            return Err(CoreError::degenerate_schedule("bond has no remaining periods").into());
        }
        if !face_value.is_finite() || face_value <= 0.0 {
            return Err(BondError::invalid_spec(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if !coupon_rate.is_finite() {
            return Err(BondError::invalid_spec("coupon rate is not finite"));
        }

        Ok(Self {
            face_value,
            coupon_rate,
            frequency,
            periods,
        })
    }

    /// Creates a bond whose remaining periods are counted from settlement
    /// to maturity under 30/360.
    ///
    /// Partial periods are truncated, so a bond settling mid-period counts
    /// only the whole periods left.
    pub fn from_dates(
        face_value: f64,
        coupon_rate: f64,
        frequency: Frequency,
        settlement: Date,
        maturity: Date,
    ) -> BondResult<Self> {
        let periods = periods_between(settlement, maturity, frequency);
        if periods < 1 {
            return Err(CoreError::degenerate_schedule(format!(
                "{periods} whole periods between {settlement} and {maturity}"
            ))
            .into());
        }
        let periods = u32::try_from(periods)
            .map_err(|_| BondError::invalid_spec(format!("{periods} periods is out of range")))?;

        Self::new(face_value, coupon_rate, frequency, periods)
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the annual coupon rate.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the coupon frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the number of remaining periods.
    #[must_use]
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// `coupon_rate / periods_per_year * face_value`
    #[must_use]
    pub fn coupon_per_period(&self) -> f64 {
        self.coupon_rate / f64::from(self.frequency.periods_per_year()) * self.face_value
    }

    /// Price at an annual yield, discounting each period at
    /// `ytm / periods_per_year`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::IllegalRate` when the per-period rate is not
    /// above -1.
    pub fn price_from_yield(&self, ytm: f64) -> BondResult<f64> {
        let rate = ytm / f64::from(self.frequency.periods_per_year());
        validate_rate(rate)?;

        let base = 1.0 + rate;
        let coupon = self.coupon_per_period();
        let n = self.periods as i32;

        let coupons: f64 = (1..=n).map(|t| coupon / base.powi(t)).sum();
        Ok(coupons + self.face_value / base.powi(n))
    }

    /// The schedule of buying this bond at `price`.
    pub fn schedule(&self, price: f64) -> BondResult<CashFlowSchedule> {
        Ok(CashFlowSchedule::bond(
            price,
            self.coupon_per_period(),
            self.face_value,
            self.periods,
            self.frequency,
        )?)
    }
}
