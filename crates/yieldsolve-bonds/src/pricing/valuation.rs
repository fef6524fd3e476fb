//! Valuation function adapters.
//!
//! A solver only sees `f(rate)` and, for Newton, `f'(rate)`. The adapters
//! here turn a schedule or an instrument plus a target price into that
//! pair. They borrow their inputs and keep no state, so the same adapter
//! can be queried any number of times, from any thread.

use yieldsolve_core::types::CashFlowSchedule;
use yieldsolve_math::solvers::FiniteDifference;

use crate::cashflows::{present_value, present_value_derivative};
use crate::error::BondResult;
use crate::instruments::FixedRateBond;

/// `f(rate) = PV(rate) - target` for some priced object.
pub trait ValuationFunction: Send + Sync {
    /// Present value at `rate` minus the target.
    fn value(&self, rate: f64) -> BondResult<f64>;

    /// `df/drate`.
    ///
    /// Defaults to a forward finite difference with the default step, for
    /// instruments whose price formula has no convenient derivative.
    fn derivative(&self, rate: f64) -> BondResult<f64> {
        FiniteDifference::default().try_derivative(|r| self.value(r), rate)
    }
}

/// Net present value of a schedule against a target.
///
/// With a target of 0 the root of this function is the schedule's IRR.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleValuation<'a> {
    schedule: &'a CashFlowSchedule,
    target: f64,
}

impl<'a> ScheduleValuation<'a> {
    /// Values `schedule` against `target`.
    #[must_use]
    pub fn new(schedule: &'a CashFlowSchedule, target: f64) -> Self {
        Self { schedule, target }
    }

    /// Values `schedule` against zero.
    #[must_use]
    pub fn npv(schedule: &'a CashFlowSchedule) -> Self {
        Self::new(schedule, 0.0)
    }

    /// Returns the schedule.
    #[must_use]
    pub fn schedule(&self) -> &'a CashFlowSchedule {
        self.schedule
    }
}

impl ValuationFunction for ScheduleValuation<'_> {
    fn value(&self, rate: f64) -> BondResult<f64> {
        Ok(present_value(self.schedule, rate)? - self.target)
    }

    fn derivative(&self, rate: f64) -> BondResult<f64> {
        present_value_derivative(self.schedule, rate)
    }
}

/// Price of a [`FixedRateBond`] at an annual yield, minus a market price.
#[derive(Debug, Clone, Copy)]
pub struct BondPriceFunction<'a> {
    bond: &'a FixedRateBond,
    price: f64,
}

impl<'a> BondPriceFunction<'a> {
    /// Values `bond` against `price`.
    #[must_use]
    pub fn new(bond: &'a FixedRateBond, price: f64) -> Self {
        Self { bond, price }
    }
}

impl ValuationFunction for BondPriceFunction<'_> {
    fn value(&self, ytm: f64) -> BondResult<f64> {
        Ok(self.bond.price_from_yield(ytm)? - self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BondError;
    use approx::assert_relative_eq;
    use yieldsolve_core::types::Frequency;

    #[test]
    fn test_schedule_valuation() {
        let schedule =
            CashFlowSchedule::from_initial_and_flows(-100.0, &[110.0], Frequency::Annual).unwrap();
        let f = ScheduleValuation::npv(&schedule);

        assert_relative_eq!(f.value(0.10).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(f.value(0.0).unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(f.derivative(0.10).unwrap(), -110.0 / 1.21, epsilon = 1e-9);
    }

    #[test]
    fn test_target_shifts_value() {
        let schedule =
            CashFlowSchedule::from_initial_and_flows(0.0, &[5.0, 105.0], Frequency::Annual)
                .unwrap();
        let f = ScheduleValuation::new(&schedule, 100.0);

        assert_relative_eq!(f.value(0.05).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let schedule =
            CashFlowSchedule::from_initial_and_flows(9702.0, &[-19700.0, 10000.0], Frequency::Annual)
                .unwrap();
        let f = ScheduleValuation::npv(&schedule);

        let first = f.value(0.0123).unwrap();
        for _ in 0..10 {
            assert_eq!(f.value(0.0123).unwrap(), first);
        }
    }

    #[test]
    fn test_bond_price_function_derivative_is_forward_difference() {
        let bond = FixedRateBond::new(100.0, 0.05, Frequency::SemiAnnual, 10).unwrap();
        let f = BondPriceFunction::new(&bond, 95.0);

        let y = 0.06;
        let expected = (bond.price_from_yield(y + 1e-5).unwrap()
            - bond.price_from_yield(y).unwrap())
            / 1e-5;

        assert_relative_eq!(f.derivative(y).unwrap(), expected, epsilon = 1e-6);
        assert!(f.derivative(y).unwrap() < 0.0);
    }

    #[test]
    fn test_illegal_rate_propagates() {
        let schedule =
            CashFlowSchedule::from_initial_and_flows(-100.0, &[110.0], Frequency::Annual).unwrap();
        let f = ScheduleValuation::npv(&schedule);

        assert!(matches!(f.value(-1.0), Err(BondError::IllegalRate { .. })));
        assert!(matches!(
            f.derivative(-3.0),
            Err(BondError::IllegalRate { .. })
        ));
    }
}
