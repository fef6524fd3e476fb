//! Modified duration and first-order price sensitivity.

use yieldsolve_bonds::cashflows::validate_rate;

use super::Duration;
use crate::RiskResult;

/// One basis point.
pub const BASIS_POINT: f64 = 0.0001;

/// Calculate modified duration from Macaulay duration.
///
/// ```text
/// D_mod = D_mac / (1 + y)
/// ```
///
/// # Errors
///
/// * `RiskError::Bond(IllegalRate)` if `yield_rate <= -1`
/// * `RiskError::OutOfRange` if the quotient exceeds the decimal range
pub fn modified_duration(macaulay: Duration, yield_rate: f64) -> RiskResult<Duration> {
    validate_rate(yield_rate)?;
    Duration::try_from(macaulay.as_f64() / (1.0 + yield_rate))
}

/// Relative price change for a one basis point yield move.
///
/// Multiply by 100 for percent.
pub fn bp_price_change(modified: Duration) -> f64 {
    modified.as_f64() * BASIS_POINT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RiskError;
    use approx::assert_relative_eq;

    #[test]
    fn test_modified_from_macaulay() {
        let mac = Duration::try_from(8.107_82).unwrap();
        let modified = modified_duration(mac, 0.05).unwrap();

        assert_relative_eq!(modified.as_f64(), 7.721_73, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_yield_leaves_duration_unchanged() {
        let mac = Duration::try_from(12.75).unwrap();
        assert_relative_eq!(
            modified_duration(mac, 0.0).unwrap().as_f64(),
            12.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bp_price_change() {
        let modified = Duration::try_from(7.721_73).unwrap();
        assert_relative_eq!(bp_price_change(modified), 0.000_772_173, epsilon = 1e-12);
    }

    #[test]
    fn test_quotient_beyond_decimal_range() {
        let mac = Duration::try_from(7e28).unwrap();
        assert!(matches!(
            modified_duration(mac, -0.9),
            Err(RiskError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_illegal_yield() {
        assert!(matches!(
            modified_duration(Duration::try_from(5.0).unwrap(), -1.0),
            Err(RiskError::Bond(_))
        ));
    }
}
