//! Macaulay duration calculation.
//!
//! ## Formula
//!
//! ```text
//! D_mac = Σ_{t=1..n} t × c_t / (1 + r)^t / P
//! ```
//!
//! where:
//! - c_t = coupon, plus face value at t = n
//! - r = per-period discount rate
//! - P = the bond's market price
//!
//! Dividing by the quoted price rather than the discounted sum lets the
//! same formula be evaluated at any rate, not only the one that reprices
//! the bond.

use yieldsolve_bonds::cashflows::validate_rate;
use yieldsolve_bonds::instruments::Bond;

use super::Duration;
use crate::{RiskError, RiskResult};

/// Calculate Macaulay duration of `bond` discounted at `rate`.
///
/// # Errors
///
/// * `RiskError::Bond(Core(DegenerateSchedule))` if the tenor is under one period
/// * `RiskError::Bond(IllegalRate)` if `rate <= -1`
/// * `RiskError::DivisionByZero` if the price is zero
/// * `RiskError::OutOfRange` if the duration exceeds the decimal range, as
///   rates near -1 or tiny prices can produce
///
/// # Example
///
/// ```rust
/// use yieldsolve_bonds::instruments::Bond;
/// use yieldsolve_risk::duration::macaulay_duration;
///
/// let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
/// let at_zero = macaulay_duration(&bond, 0.0).unwrap();
///
/// // (5 × (1 + 2 + ... + 10) + 100 × 10) / 100
/// assert!((at_zero.as_f64() - 12.75).abs() < 1e-9);
/// ```
pub fn macaulay_duration(bond: &Bond, rate: f64) -> RiskResult<Duration> {
    validate_rate(rate)?;
    let payments = bond.payments()?;

    if bond.price == 0.0 {
        return Err(RiskError::DivisionByZero {
            context: "macaulay duration: price is zero".to_string(),
        });
    }

    let base = 1.0 + rate;
    let weighted_sum: f64 = payments
        .map(|(t, c)| f64::from(t) * c / base.powi(t as i32))
        .sum();

    Duration::try_from(weighted_sum / bond.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldsolve_bonds::BondError;
    use yieldsolve_core::CoreError;

    fn ten_year() -> Bond {
        Bond::new(2020, 2030, 100.0, 0.05, 5.0)
    }

    #[test]
    fn test_at_yield() {
        let d = macaulay_duration(&ten_year(), 0.05).unwrap();
        assert_relative_eq!(d.as_f64(), 8.107_82, epsilon = 1e-5);
    }

    #[test]
    fn test_at_zero() {
        let d = macaulay_duration(&ten_year(), 0.0).unwrap();
        assert_relative_eq!(d.as_f64(), 12.75, epsilon = 1e-12);
    }

    #[test]
    fn test_shocked_rates() {
        let up = macaulay_duration(&ten_year(), 0.15).unwrap();
        let down = macaulay_duration(&ten_year(), -0.05).unwrap();

        assert_relative_eq!(up.as_f64(), 3.571_76, epsilon = 1e-5);
        assert_relative_eq!(down.as_f64(), 20.670_18, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_coupon_at_par_price() {
        // Single payment at t = 5 priced at its PV: duration equals maturity
        let rate: f64 = 0.04;
        let price = 100.0 / (1.0 + rate).powi(5);
        let bond = Bond::new(0, 5, price, rate, 0.0);

        let d = macaulay_duration(&bond, rate).unwrap();
        assert_relative_eq!(d.as_f64(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_period() {
        let bond = Bond::new(2024, 2025, 100.0, 0.05, 5.0);
        let d = macaulay_duration(&bond, 0.05).unwrap();
        assert_relative_eq!(d.as_f64(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_tenor() {
        let bond = Bond::new(2030, 2030, 100.0, 0.05, 5.0);
        assert!(matches!(
            macaulay_duration(&bond, 0.05),
            Err(RiskError::Bond(BondError::Core(
                CoreError::DegenerateSchedule { .. }
            )))
        ));
    }

    #[test]
    fn test_illegal_rate() {
        assert!(matches!(
            macaulay_duration(&ten_year(), -1.0),
            Err(RiskError::Bond(BondError::IllegalRate { .. }))
        ));
    }

    #[test]
    fn test_rate_near_minus_one_overflows() {
        let bond = Bond::new(2000, 2030, 100.0, 0.05, 5.0);

        let at_zero = macaulay_duration(&bond, 0.0).unwrap();
        assert_relative_eq!(at_zero.as_f64(), 53.25, epsilon = 1e-9);

        // Weight of the final payment is about 3e31 periods
        assert!(matches!(
            macaulay_duration(&bond, -0.9),
            Err(RiskError::OutOfRange { .. })
        ));

        let deep = macaulay_duration(&bond, -0.5).unwrap();
        assert!(deep > at_zero);
    }

    #[test]
    fn test_tiny_price_overflows() {
        let bond = Bond::new(2020, 2030, 1e-30, 0.05, 5.0);
        assert!(matches!(
            macaulay_duration(&bond, 0.05),
            Err(RiskError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_price() {
        let bond = Bond::new(2020, 2030, 0.0, 0.05, 5.0);
        assert!(matches!(
            macaulay_duration(&bond, 0.05),
            Err(RiskError::DivisionByZero { .. })
        ));
    }
}
