//! Discrete periodic discounting.

use yieldsolve_core::types::CashFlowSchedule;

use crate::error::{BondError, BondResult};

/// Rejects rates for which `1 + rate` is not a positive finite base.
pub fn validate_rate(rate: f64) -> BondResult<()> {
    if rate.is_finite() && rate > -1.0 {
        Ok(())
    } else {
        Err(BondError::illegal_rate(rate))
    }
}

/// Discount factor `1 / (1 + rate)^periods`.
///
/// # Example
///
/// ```rust
/// use yieldsolve_bonds::cashflows::discount_factor;
///
/// let df = discount_factor(0.05, 2).unwrap();
/// assert!((df - 1.0 / 1.1025).abs() < 1e-12);
/// assert!(discount_factor(-1.0, 1).is_err());
/// ```
pub fn discount_factor(rate: f64, periods: u32) -> BondResult<f64> {
    validate_rate(rate)?;
    Ok((1.0 + rate).powi(periods as i32).recip())
}

/// Present value of a schedule at a per-period rate.
///
/// `PV = Σ amount_t / (1 + rate)^t`, where the flow at offset 0 is taken
/// at face value. At `rate = 0` this is the plain sum of the amounts.
///
/// Callers quoting an annual rate for a semiannual schedule must pass
/// `annual / 2`.
pub fn present_value(schedule: &CashFlowSchedule, rate: f64) -> BondResult<f64> {
    validate_rate(rate)?;
    let base = 1.0 + rate;
    Ok(schedule
        .iter()
        .map(|cf| cf.amount() / base.powi(cf.offset() as i32))
        .sum())
}

/// Analytic derivative of [`present_value`] with respect to the rate.
///
/// `dPV/dr = Σ -t · amount_t / (1 + rate)^(t + 1)`
pub fn present_value_derivative(schedule: &CashFlowSchedule, rate: f64) -> BondResult<f64> {
    validate_rate(rate)?;
    let base = 1.0 + rate;
    Ok(schedule
        .iter()
        .filter(|cf| cf.offset() > 0)
        .map(|cf| {
            let t = cf.offset() as i32;
            -f64::from(t) * cf.amount() / base.powi(t + 1)
        })
        .sum())
}
