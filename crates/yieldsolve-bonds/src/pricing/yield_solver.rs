//! Yield-to-maturity solver.
//!
//! Newton-Raphson on `price(ytm) - market_price`, with the derivative
//! taken by finite difference since the bond's price formula is not
//! differentiated analytically.
//!
//! # Example
//!
//! ```rust
//! use yieldsolve_bonds::instruments::FixedRateBond;
//! use yieldsolve_bonds::pricing::YieldSolver;
//! use yieldsolve_core::types::Frequency;
//!
//! let bond = FixedRateBond::new(100.0, 0.05, Frequency::SemiAnnual, 10).unwrap();
//! let result = YieldSolver::new().solve(&bond, 95.0).unwrap();
//!
//! println!("YTM: {:.6}%", result.as_percent());
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use yieldsolve_math::solvers::{
    try_bisection, try_newton_raphson, FiniteDifference, SolverConfig, SolverResult,
    DEFAULT_MAX_ITERATIONS, PRECISE_TOLERANCE,
};

use crate::error::{BondError, BondResult};
use crate::instruments::FixedRateBond;
use crate::pricing::valuation::{BondPriceFunction, ValuationFunction};

/// Starting yield for Newton iteration.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final residual (should be near zero).
    pub residual: f64,
}

impl YieldResult {
    /// The yield in percent.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.yield_value * 100.0
    }
}

impl From<SolverResult> for YieldResult {
    fn from(result: SolverResult) -> Self {
        Self {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        }
    }
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Copy)]
pub struct YieldSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Newton starting point.
    initial_guess: f64,
    /// Derivative estimate for the price function.
    finite_difference: FiniteDifference,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-6
    /// Default max iterations: 100
    /// Default initial guess: 5%
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(PRECISE_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            initial_guess: DEFAULT_INITIAL_GUESS,
            finite_difference: FiniteDifference::default(),
        }
    }

    /// Sets the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the Newton starting point.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the finite-difference scheme.
    #[must_use]
    pub fn with_finite_difference(mut self, finite_difference: FiniteDifference) -> Self {
        self.finite_difference = finite_difference;
        self
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the annual yield at which the bond prices to `price`.
    ///
    /// # Errors
    ///
    /// * `BondError::InvalidSpec` for a non-positive price
    /// * `BondError::Math(NonConvergence)` when Newton stalls or runs out
    ///   of iterations
    /// * `BondError::IllegalRate` when an iterate drops to `-periods_per_year`
    pub fn solve(&self, bond: &FixedRateBond, price: f64) -> BondResult<YieldResult> {
        validate_price(price)?;
        let f = BondPriceFunction::new(bond, price);
        let scheme = self.finite_difference;

        let result = try_newton_raphson(
            |y| f.value(y),
            |y| scheme.try_derivative(|z| f.value(z), y),
            self.initial_guess,
            &self.config,
        )
        .map_err(|err: BondError| {
            warn!("ytm: price {price} did not solve: {err}");
            err
        })?;

        debug!(
            "ytm: price {price} -> {:.6}% in {} iterations",
            result.root * 100.0,
            result.iterations
        );
        Ok(result.into())
    }

    /// Solves by bisection over an annual-yield bracket.
    pub fn solve_bracketed(
        &self,
        bond: &FixedRateBond,
        price: f64,
        low: f64,
        high: f64,
    ) -> BondResult<YieldResult> {
        validate_price(price)?;
        let f = BondPriceFunction::new(bond, price);
        let result = try_bisection(|y| f.value(y), low, high, &self.config)?;
        Ok(result.into())
    }
}

fn validate_price(price: f64) -> BondResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_spec(format!(
            "price must be positive, got {price}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldsolve_core::types::Frequency;
    use yieldsolve_math::{MathError, NonConvergenceCause};

    fn five_percent_semi(periods: u32) -> FixedRateBond {
        FixedRateBond::new(100.0, 0.05, Frequency::SemiAnnual, periods).unwrap()
    }

    #[test]
    fn test_discount_bond_yields_above_coupon() {
        let result = YieldSolver::new().solve(&five_percent_semi(10), 95.0).unwrap();

        assert!(result.yield_value > 0.05);
        assert_relative_eq!(result.yield_value, 0.061_776_2, epsilon = 1e-6);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_par_bond() {
        let result = YieldSolver::new().solve(&five_percent_semi(10), 100.0).unwrap();

        // Initial guess is already the root
        assert_relative_eq!(result.yield_value, 0.05, epsilon = 1e-9);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_premium_bond_yields_below_coupon() {
        let result = YieldSolver::new().solve(&five_percent_semi(20), 108.0).unwrap();

        assert!(result.yield_value < 0.05);
        assert!(result.yield_value > 0.0);
    }

    #[test]
    fn test_as_percent() {
        let result = YieldResult {
            yield_value: 0.0617,
            iterations: 3,
            residual: 0.0,
        };
        assert_relative_eq!(result.as_percent(), 6.17, epsilon = 1e-12);
    }

    #[test]
    fn test_bracketed_agrees_with_newton() {
        let bond = five_percent_semi(14);
        let solver = YieldSolver::new();

        let newton = solver.solve(&bond, 97.25).unwrap();
        let bisect = solver.solve_bracketed(&bond, 97.25, 0.0, 0.2).unwrap();

        assert!((newton.yield_value - bisect.yield_value).abs() < 1e-5);
    }

    #[test]
    fn test_central_difference_agrees() {
        let bond = five_percent_semi(10);
        let forward = YieldSolver::new().solve(&bond, 95.0).unwrap();
        let central = YieldSolver::new()
            .with_finite_difference(FiniteDifference::central())
            .solve(&bond, 95.0)
            .unwrap();

        assert_relative_eq!(forward.yield_value, central.yield_value, epsilon = 1e-7);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let err = YieldSolver::new()
            .with_max_iterations(1)
            .with_tolerance(1e-14)
            .solve(&five_percent_semi(10), 95.0)
            .unwrap_err();

        assert!(matches!(
            err,
            BondError::Math(MathError::NonConvergence {
                cause: NonConvergenceCause::IterationLimit,
                iterations: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_price() {
        for price in [0.0, -5.0, f64::NAN] {
            assert!(matches!(
                YieldSolver::new().solve(&five_percent_semi(10), price),
                Err(BondError::InvalidSpec { .. })
            ));
        }
    }
}
