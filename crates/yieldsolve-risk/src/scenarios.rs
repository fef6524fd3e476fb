//! Duration under yield scenarios.
//!
//! A [`DurationProfile`] evaluates the same Macaulay formula at the
//! stated yield, at zero and at the yield shifted up and down by a fixed
//! shock. Each figure is an independent call.

use serde::{Deserialize, Serialize};
use yieldsolve_bonds::instruments::Bond;

use crate::duration::{bp_price_change, macaulay_duration, modified_duration, Duration};
use crate::dv01::{dv01, DV01};
use crate::RiskResult;

/// Absolute yield shift applied by [`duration_profile`] by default.
///
/// `0.1` is ten percentage points, not ten basis points.
pub const DEFAULT_YIELD_SHOCK: f64 = 0.1;

/// Duration figures for one bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationProfile {
    /// Macaulay duration at the bond's yield.
    pub macaulay: Duration,
    /// Macaulay duration at a zero rate.
    pub at_zero: Duration,
    /// Macaulay duration at `yield + shock`.
    pub shocked_up: Duration,
    /// Macaulay duration at `yield - shock`.
    pub shocked_down: Duration,
    /// Modified duration at the bond's yield.
    pub modified: Duration,
    /// Relative price change for a one basis point move.
    pub bp_price_change: f64,
}

impl DurationProfile {
    /// Absolute price change per basis point at `price`.
    ///
    /// # Errors
    ///
    /// `RiskError::OutOfRange` if the product is not representable.
    pub fn dv01(&self, price: f64) -> RiskResult<DV01> {
        dv01(self.modified, price)
    }
}

/// Builds the [`DurationProfile`] of `bond` with a `shock`-sized yield move.
///
/// # Errors
///
/// Fails like [`macaulay_duration`]. In particular a shocked-down rate at
/// or below -1 is `IllegalRate`.
///
/// # Example
///
/// ```rust
/// use yieldsolve_bonds::instruments::Bond;
/// use yieldsolve_risk::scenarios::{duration_profile, DEFAULT_YIELD_SHOCK};
///
/// let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
/// let profile = duration_profile(&bond, DEFAULT_YIELD_SHOCK).unwrap();
///
/// assert!(profile.at_zero >= profile.macaulay);
/// assert!(profile.shocked_up < profile.macaulay);
/// assert!(profile.shocked_down > profile.macaulay);
/// ```
pub fn duration_profile(bond: &Bond, shock: f64) -> RiskResult<DurationProfile> {
    let y = bond.yield_rate;
    let macaulay = macaulay_duration(bond, y)?;
    let modified = modified_duration(macaulay, y)?;

    Ok(DurationProfile {
        macaulay,
        at_zero: macaulay_duration(bond, 0.0)?,
        shocked_up: macaulay_duration(bond, y + shock)?,
        shocked_down: macaulay_duration(bond, y - shock)?,
        modified,
        bp_price_change: bp_price_change(modified),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RiskError;
    use approx::assert_relative_eq;
    use yieldsolve_bonds::BondError;

    #[test]
    fn test_profile_figures() {
        let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
        let profile = duration_profile(&bond, DEFAULT_YIELD_SHOCK).unwrap();

        assert_relative_eq!(profile.macaulay.as_f64(), 8.107_82, epsilon = 1e-5);
        assert_relative_eq!(profile.at_zero.as_f64(), 12.75, epsilon = 1e-9);
        assert_relative_eq!(profile.shocked_up.as_f64(), 3.571_76, epsilon = 1e-5);
        assert_relative_eq!(profile.shocked_down.as_f64(), 20.670_18, epsilon = 1e-5);
        assert_relative_eq!(profile.modified.as_f64(), 7.721_73, epsilon = 1e-5);
        assert_relative_eq!(profile.bp_price_change, 0.000_772_173, epsilon = 1e-8);
        assert_relative_eq!(
            profile.dv01(bond.price).unwrap().as_f64(),
            0.077_217_3,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_small_shock() {
        let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
        let profile = duration_profile(&bond, 0.001).unwrap();

        assert!((profile.shocked_up.as_f64() - profile.macaulay.as_f64()).abs() < 0.1);
    }

    #[test]
    fn test_shock_below_minus_one() {
        let bond = Bond::new(2020, 2030, 100.0, -0.95, 5.0);
        let result = duration_profile(&bond, DEFAULT_YIELD_SHOCK);

        assert!(matches!(
            result,
            Err(RiskError::Bond(BondError::IllegalRate { .. }))
        ));
    }
}
