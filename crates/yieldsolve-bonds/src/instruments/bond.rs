//! Bond record for duration analysis.

use serde::{Deserialize, Serialize};
use yieldsolve_core::types::{CashFlowSchedule, Frequency};
use yieldsolve_core::{CoreError, CoreResult};

fn default_face_value() -> f64 {
    100.0
}

/// A level-coupon bond described in whole periods.
///
/// The tenor is `maturity_period - issue_period` and must be at least one
/// period. Coupons are paid at the end of periods `1..=tenor`; the face
/// value is repaid with the last one.
///
/// # Example
///
/// ```rust
/// use yieldsolve_bonds::instruments::Bond;
///
/// let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
/// assert_eq!(bond.tenor().unwrap(), 10);
///
/// let last = bond.payments().unwrap().last().unwrap();
/// assert_eq!(last, (10, 105.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Period the bond was issued (or offered) in.
    pub issue_period: i32,
    /// Period the bond matures in.
    pub maturity_period: i32,
    /// Market price.
    pub price: f64,
    /// Yield per period, as a decimal.
    #[serde(rename = "yield")]
    pub yield_rate: f64,
    /// Coupon paid each period.
    pub coupon_per_period: f64,
    /// Principal repaid at maturity.
    #[serde(default = "default_face_value")]
    pub face_value: f64,
}

impl Bond {
    /// Creates a bond record with a face value of 100.
    #[must_use]
    pub fn new(
        issue_period: i32,
        maturity_period: i32,
        price: f64,
        yield_rate: f64,
        coupon_per_period: f64,
    ) -> Self {
        Self {
            issue_period,
            maturity_period,
            price,
            yield_rate,
            coupon_per_period,
            face_value: default_face_value(),
        }
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: f64) -> Self {
        self.face_value = face_value;
        self
    }

    /// Number of coupon periods to maturity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DegenerateSchedule` when maturity is not at
    /// least one period after issue.
    pub fn tenor(&self) -> CoreResult<u32> {
        let tenor = i64::from(self.maturity_period) - i64::from(self.issue_period);
        if tenor < 1 {
            return Err(CoreError::degenerate_schedule(format!(
                "tenor of {tenor} periods (issue {}, maturity {})",
                self.issue_period, self.maturity_period
            )));
        }
        u32::try_from(tenor).map_err(|_| CoreError::degenerate_schedule("tenor out of range"))
    }

    /// `(period, amount)` for every payment, in order.
    pub fn payments(&self) -> CoreResult<impl Iterator<Item = (u32, f64)> + '_> {
        let tenor = self.tenor()?;
        Ok((1..=tenor).map(move |t| {
            if t == tenor {
                (t, self.coupon_per_period + self.face_value)
            } else {
                (t, self.coupon_per_period)
            }
        }))
    }

    /// The schedule of buying this bond at its price.
    ///
    /// Its per-period IRR is the bond's yield.
    pub fn schedule(&self, frequency: Frequency) -> CoreResult<CashFlowSchedule> {
        CashFlowSchedule::bond(
            self.price,
            self.coupon_per_period,
            self.face_value,
            self.tenor()?,
            frequency,
        )
    }
}
