//! Fixtures carried over from the reference IRR and YTM runs.

use approx::assert_relative_eq;
use yieldsolve_bonds::prelude::*;
use yieldsolve_core::types::{CashFlowSchedule, Date, Frequency};
use yieldsolve_math::MathError;

fn irr_fixture() -> CashFlowSchedule {
    CashFlowSchedule::from_initial_and_flows(9702.0, &[-19700.0, 10000.0], Frequency::Annual)
        .unwrap()
}

#[test]
fn irr_fixture_values() {
    let schedule = irr_fixture();

    assert_relative_eq!(present_value(&schedule, 0.0).unwrap(), 2.0, epsilon = 1e-9);
    assert!(present_value(&schedule, 0.015).unwrap() < 0.0);
    assert!(present_value(&schedule, 0.03).unwrap() > 0.0);
}

#[test]
fn irr_bisection_and_newton_agree_per_root() {
    let calc = IrrCalculator::default();
    let schedule = irr_fixture();

    let bisect_lower = calc.bisection(&schedule, 0.0, 0.015).unwrap();
    let bisect_upper = calc.bisection(&schedule, 0.015, 0.03).unwrap();
    let newton_lower = calc.newton(&schedule, 0.0).unwrap();
    let newton_upper = calc.newton(&schedule, 0.5).unwrap();

    assert!((bisect_lower.periodic_rate - newton_lower.periodic_rate).abs() < 1e-4);
    assert!((bisect_upper.periodic_rate - newton_upper.periodic_rate).abs() < 1e-4);
    assert_relative_eq!(newton_lower.periodic_rate, 0.010_101, epsilon = 1e-5);
    assert_relative_eq!(newton_upper.periodic_rate, 0.020_408, epsilon = 1e-5);
}

#[test]
fn irr_outer_bracket_is_reported_not_guessed() {
    // Both roots lie inside [0, 0.03] but the endpoints share a sign
    let err = IrrCalculator::default()
        .bisection(&irr_fixture(), 0.0, 0.03)
        .unwrap_err();

    assert!(matches!(err, BondError::Math(MathError::InvalidBracket { .. })));
}

#[test]
fn ytm_from_settlement_and_maturity() {
    let settlement = Date::from_ymd(2024, 1, 15).unwrap();
    let maturity = Date::from_ymd(2029, 1, 15).unwrap();

    let bond =
        FixedRateBond::from_dates(100.0, 0.05, Frequency::SemiAnnual, settlement, maturity).unwrap();
    assert_eq!(bond.periods(), 10);

    let ytm = YieldSolver::new().solve(&bond, 95.0).unwrap();
    assert!(ytm.yield_value > 0.05);
    assert_relative_eq!(ytm.as_percent(), 6.177_62, epsilon = 1e-4);

    let accrued =
        accrued_interest(settlement, maturity, bond.coupon_per_period(), Frequency::SemiAnnual)
            .unwrap();
    let prices = PriceBreakdown::from_clean(95.0, accrued);
    assert_relative_eq!(prices.dirty, 95.0);
}

#[test]
fn ytm_mid_period_settlement() {
    let settlement = Date::from_ymd(2024, 3, 15).unwrap();
    let maturity = Date::from_ymd(2029, 1, 15).unwrap();

    let bond =
        FixedRateBond::from_dates(100.0, 0.05, Frequency::SemiAnnual, settlement, maturity).unwrap();
    assert_eq!(bond.periods(), 9);

    let ytm = YieldSolver::new().solve(&bond, 95.0).unwrap();
    assert_relative_eq!(ytm.yield_value, 0.062_931_3, epsilon = 1e-6);

    let accrued =
        accrued_interest(settlement, maturity, bond.coupon_per_period(), Frequency::SemiAnnual)
            .unwrap();
    let prices = PriceBreakdown::from_clean(95.0, accrued);
    assert_relative_eq!(prices.accrued, 2.5 * 2.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(prices.dirty, 95.0 + 2.5 * 2.0 / 3.0, epsilon = 1e-12);
}
