//! Internal rate of return.
//!
//! # Example
//!
//! ```rust
//! use yieldsolve_bonds::pricing::IrrCalculator;
//! use yieldsolve_core::types::{CashFlowSchedule, Frequency};
//!
//! // Two roots: 1/99 and 1/49
//! let schedule =
//!     CashFlowSchedule::from_initial_and_flows(9702.0, &[-19700.0, 10000.0], Frequency::Annual)
//!         .unwrap();
//! let calc = IrrCalculator::default();
//!
//! let lower = calc.bisection(&schedule, 0.0, 0.015).unwrap();
//! let upper = calc.newton(&schedule, 0.5).unwrap();
//!
//! assert!((lower.periodic_rate - 0.010101).abs() < 1e-4);
//! assert!((upper.periodic_rate - 0.020408).abs() < 1e-4);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use yieldsolve_core::types::{CashFlowSchedule, Frequency};
use yieldsolve_math::solvers::{try_bisection, try_newton_raphson, Solver, SolverConfig, SolverResult};

use crate::error::{BondError, BondResult};
use crate::pricing::valuation::{ScheduleValuation, ValuationFunction};

/// A converged internal rate of return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrResult {
    /// Rate per compounding period of the schedule.
    pub periodic_rate: f64,
    /// Solver iterations used.
    pub iterations: u32,
    /// NPV at `periodic_rate`.
    pub residual: f64,
    /// Compounding frequency of the schedule.
    pub frequency: Frequency,
}

impl IrrResult {
    fn from_solver(result: SolverResult, frequency: Frequency) -> Self {
        Self {
            periodic_rate: result.root,
            iterations: result.iterations,
            residual: result.residual,
            frequency,
        }
    }

    /// Periodic rate times periods per year.
    #[must_use]
    pub fn nominal_annual(&self) -> f64 {
        self.periodic_rate * f64::from(self.frequency.periods_per_year())
    }

    /// `(1 + periodic)^periods_per_year - 1`
    #[must_use]
    pub fn effective_annual(&self) -> f64 {
        (1.0 + self.periodic_rate).powi(self.frequency.periods_per_year() as i32) - 1.0
    }
}

/// Solves for the rate that zeroes a schedule's NPV.
#[derive(Debug, Clone, Copy, Default)]
pub struct IrrCalculator {
    config: SolverConfig,
}

impl IrrCalculator {
    /// Creates a calculator with the given solver configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
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

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// IRR by bisection over `[low, high]`.
    ///
    /// # Errors
    ///
    /// * `BondError::Math(InvalidBracket)` when NPV has the same sign at
    ///   both ends
    /// * `BondError::IllegalRate` when the bracket reaches -1 or below
    pub fn bisection(&self, schedule: &CashFlowSchedule, low: f64, high: f64) -> BondResult<IrrResult> {
        let npv = ScheduleValuation::npv(schedule);
        let result = try_bisection(|r| npv.value(r), low, high, &self.config)?;
        debug!(
            "irr: bisection on [{low}, {high}] found {} in {} iterations",
            result.root, result.iterations
        );
        Ok(IrrResult::from_solver(result, schedule.frequency()))
    }

    /// IRR by Newton-Raphson with the analytic NPV derivative.
    ///
    /// Different guesses may converge to different roots when the
    /// schedule changes sign more than once.
    pub fn newton(&self, schedule: &CashFlowSchedule, guess: f64) -> BondResult<IrrResult> {
        let npv = ScheduleValuation::npv(schedule);
        let result = try_newton_raphson(|r| npv.value(r), |r| npv.derivative(r), guess, &self.config)?;
        debug!(
            "irr: newton from {guess} found {} in {} iterations",
            result.root, result.iterations
        );
        Ok(IrrResult::from_solver(result, schedule.frequency()))
    }

    /// IRR with any [`Solver`], passing the analytic derivative along.
    pub fn solve_with<S: Solver>(
        &self,
        solver: &S,
        schedule: &CashFlowSchedule,
        guess: f64,
        bounds: Option<(f64, f64)>,
    ) -> BondResult<IrrResult> {
        let npv = ScheduleValuation::npv(schedule);
        let result = solver.solve::<_, _, BondError>(
            |r| npv.value(r),
            Some(|r| npv.derivative(r)),
            guess,
            bounds,
            &self.config,
        )?;
        debug!("irr: {} found {}", solver.name(), result.root);
        Ok(IrrResult::from_solver(result, schedule.frequency()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldsolve_math::solvers::{BisectionSolver, NewtonSolver};
    use yieldsolve_math::{MathError, NonConvergenceCause};

    fn irr_fixture() -> CashFlowSchedule {
        CashFlowSchedule::from_initial_and_flows(9702.0, &[-19700.0, 10000.0], Frequency::Annual)
            .unwrap()
    }

    #[test]
    fn test_bisection_finds_both_roots() {
        let calc = IrrCalculator::default();
        let schedule = irr_fixture();

        let lower = calc.bisection(&schedule, 0.0, 0.015).unwrap();
        let upper = calc.bisection(&schedule, 0.015, 0.03).unwrap();

        assert!((lower.periodic_rate - 1.0 / 99.0).abs() < 1e-4);
        assert!((upper.periodic_rate - 1.0 / 49.0).abs() < 1e-4);
    }

    #[test]
    fn test_bisection_same_sign_bracket() {
        let result = IrrCalculator::default().bisection(&irr_fixture(), 0.0, 0.03);

        assert!(matches!(
            result,
            Err(BondError::Math(MathError::InvalidBracket { .. }))
        ));
    }

    #[test]
    fn test_newton_finds_both_roots() {
        let calc = IrrCalculator::default();
        let schedule = irr_fixture();

        let lower = calc.newton(&schedule, 0.0).unwrap();
        let upper = calc.newton(&schedule, 0.5).unwrap();

        assert_relative_eq!(lower.periodic_rate, 1.0 / 99.0, epsilon = 1e-5);
        assert_relative_eq!(upper.periodic_rate, 1.0 / 49.0, epsilon = 1e-5);
        assert!(lower.residual.abs() < 1e-4);
    }

    #[test]
    fn test_single_period_pair() {
        // {-P at t=0, P(1+r) at t=1}
        let (price, rate) = (500.0, 0.08);
        let schedule = CashFlowSchedule::from_initial_and_flows(
            -price,
            &[price * (1.0 + rate)],
            Frequency::Annual,
        )
        .unwrap();
        let calc = IrrCalculator::default();

        let bisect = calc.bisection(&schedule, 0.0, 1.0).unwrap();
        let newton = calc.newton(&schedule, 0.0).unwrap();

        assert!((bisect.periodic_rate - rate).abs() < 1e-4);
        assert!((newton.periodic_rate - rate).abs() < 1e-4);
    }

    #[test]
    fn test_bracket_below_minus_one_is_illegal() {
        let result = IrrCalculator::default().bisection(&irr_fixture(), -1.5, 0.015);

        assert!(matches!(result, Err(BondError::IllegalRate { .. })));
    }

    #[test]
    fn test_newton_flat_npv() {
        // Zero flows after the initial amount: NPV is constant, derivative is zero
        let schedule =
            CashFlowSchedule::from_initial_and_flows(5.0, &[0.0], Frequency::Annual).unwrap();

        let err = IrrCalculator::default().newton(&schedule, 0.1).unwrap_err();

        assert!(matches!(
            err,
            BondError::Math(MathError::NonConvergence {
                cause: NonConvergenceCause::FlatDerivative,
                ..
            })
        ));
        assert!(err.is_non_convergence());
    }

    #[test]
    fn test_annualization() {
        let schedule = CashFlowSchedule::from_initial_and_flows(
            -100.0,
            &[3.0, 3.0, 3.0, 103.0],
            Frequency::SemiAnnual,
        )
        .unwrap();
        let result = IrrCalculator::default()
            .with_tolerance(1e-10)
            .newton(&schedule, 0.01)
            .unwrap();

        assert_relative_eq!(result.periodic_rate, 0.03, epsilon = 1e-9);
        assert_relative_eq!(result.nominal_annual(), 0.06, epsilon = 1e-9);
        assert_relative_eq!(result.effective_annual(), 1.03f64.powi(2) - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_with_trait_objects_agree() {
        let calc = IrrCalculator::new(SolverConfig::precise());
        let schedule = irr_fixture();

        let newton = calc
            .solve_with(&NewtonSolver::default(), &schedule, 0.0, None)
            .unwrap();
        let bisect = calc
            .solve_with(&BisectionSolver, &schedule, 0.0, Some((0.0, 0.015)))
            .unwrap();

        assert!((newton.periodic_rate - bisect.periodic_rate).abs() < 1e-5);
    }
}
