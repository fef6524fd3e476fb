//! Batch duration calculator.
//!
//! # Example
//!
//! ```rust
//! use yieldsolve_bonds::instruments::Bond;
//! use yieldsolve_risk::calculator::DurationCalculator;
//!
//! let bonds = vec![
//!     Bond::new(2020, 2030, 100.0, 0.05, 5.0),
//!     Bond::new(2024, 2024, 100.0, 0.05, 5.0), // no periods left
//!     Bond::new(2015, 2045, 92.0, 0.06, 5.5),
//! ];
//!
//! let profiles = DurationCalculator::new().profiles(&bonds);
//!
//! assert_eq!(profiles.len(), 3);
//! assert!(profiles[0].is_ok());
//! assert!(profiles[1].is_err());
//! assert!(profiles[2].is_ok());
//! ```

use log::{debug, warn};
use rayon::prelude::*;
use yieldsolve_bonds::instruments::Bond;

use crate::scenarios::{duration_profile, DurationProfile, DEFAULT_YIELD_SHOCK};
use crate::{RiskError, RiskResult};

/// Batches at least this long are processed on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Computes duration profiles for any number of bond records.
///
/// Every record is independent: a failure is reported in that record's
/// slot and the rest of the batch is unaffected.
#[derive(Debug, Clone, Copy)]
pub struct DurationCalculator {
    shock: f64,
    parallel_threshold: usize,
}

impl Default for DurationCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationCalculator {
    /// Calculator with [`DEFAULT_YIELD_SHOCK`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            shock: DEFAULT_YIELD_SHOCK,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the yield shock.
    #[must_use]
    pub fn with_shock(mut self, shock: f64) -> Self {
        self.shock = shock;
        self
    }

    /// Sets the batch length from which work runs in parallel.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns the yield shock.
    pub fn shock(&self) -> f64 {
        self.shock
    }

    /// Checks the shock is usable.
    pub fn validate(&self) -> RiskResult<()> {
        if self.shock.is_finite() && self.shock >= 0.0 {
            Ok(())
        } else {
            Err(RiskError::InvalidInput(format!(
                "yield shock must be finite and non-negative, got {}",
                self.shock
            )))
        }
    }

    /// Profile of a single bond.
    pub fn profile(&self, bond: &Bond) -> RiskResult<DurationProfile> {
        self.validate()?;
        duration_profile(bond, self.shock)
    }

    /// Profiles of every bond, in input order.
    pub fn profiles(&self, bonds: &[Bond]) -> Vec<RiskResult<DurationProfile>> {
        let results: Vec<_> = if bonds.len() >= self.parallel_threshold {
            debug!("duration: {} bonds on the rayon pool", bonds.len());
            bonds.par_iter().map(|bond| self.profile(bond)).collect()
        } else {
            bonds.iter().map(|bond| self.profile(bond)).collect()
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("duration: {failed} of {} bonds failed", bonds.len());
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn batch(n: usize) -> Vec<Bond> {
        (0..n)
            .map(|i| {
                let tenor = 1 + (i % 30) as i32;
                let coupon = 2.0 + (i % 7) as f64;
                Bond::new(2000, 2000 + tenor, 95.0 + (i % 11) as f64, 0.04, coupon)
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let bonds = batch(200);
        let sequential = DurationCalculator::new()
            .with_parallel_threshold(usize::MAX)
            .profiles(&bonds);
        let parallel = DurationCalculator::new()
            .with_parallel_threshold(1)
            .profiles(&bonds);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_order_is_preserved() {
        let bonds = batch(100);
        let profiles = DurationCalculator::new()
            .with_parallel_threshold(1)
            .profiles(&bonds);

        for (bond, profile) in bonds.iter().zip(&profiles) {
            let expected = duration_profile(bond, DEFAULT_YIELD_SHOCK).unwrap();
            assert_eq!(profile.as_ref().unwrap(), &expected);
        }
    }

    #[test]
    fn test_custom_shock() {
        let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
        let profile = DurationCalculator::new()
            .with_shock(0.001)
            .profile(&bond)
            .unwrap();

        assert!(profile.shocked_up < profile.macaulay);
        assert_relative_eq!(
            profile.shocked_up.as_f64(),
            profile.macaulay.as_f64(),
            epsilon = 0.1
        );
    }

    #[test]
    fn test_invalid_shock() {
        let bond = Bond::new(2020, 2030, 100.0, 0.05, 5.0);
        let result = DurationCalculator::new().with_shock(f64::NAN).profile(&bond);

        assert!(matches!(result, Err(RiskError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_batch() {
        assert!(DurationCalculator::new().profiles(&[]).is_empty());
    }
}
