//! Property tests for the bisection and Newton solvers.

use proptest::prelude::*;
use yieldsolve_math::prelude::*;

/// `{-P at t=0, P(1+r) at t=1}` discounted at `x`.
fn single_period(price: f64, rate: f64) -> impl Fn(f64) -> f64 {
    move |x| -price + price * (1.0 + rate) / (1.0 + x)
}

fn single_period_derivative(price: f64, rate: f64) -> impl Fn(f64) -> f64 {
    move |x| -price * (1.0 + rate) / (1.0 + x).powi(2)
}

proptest! {
    #[test]
    fn bisection_recovers_single_period_rate(
        price in 1.0f64..10_000.0,
        rate in -0.5f64..0.9,
    ) {
        let config = SolverConfig::default();
        let result = bisection(single_period(price, rate), -0.9, 1.0, &config).unwrap();
        prop_assert!((result.root - rate).abs() <= config.tolerance);
    }

    #[test]
    fn newton_recovers_single_period_rate(
        price in 1.0f64..10_000.0,
        rate in -0.2f64..0.5,
    ) {
        let config = SolverConfig::precise();
        let result = newton_raphson(
            single_period(price, rate),
            single_period_derivative(price, rate),
            0.0,
            &config,
        )
        .unwrap();
        prop_assert!(single_period(price, rate)(result.root).abs() < config.tolerance);
    }

    #[test]
    fn newton_agrees_with_bisection(
        price in 10.0f64..1_000.0,
        rate in 0.0f64..0.3,
    ) {
        let config = SolverConfig::precise();
        let f = single_period(price, rate);
        let df = single_period_derivative(price, rate);

        let newton = newton_raphson(&f, &df, 0.1, &config).unwrap();
        let bisect = bisection(&f, -0.5, 1.0, &config).unwrap();

        prop_assert!((newton.root - bisect.root).abs() < 1e-5);
    }

    #[test]
    fn degenerate_bracket_returns_immediately(x in -10.0f64..10.0) {
        let result = bisection(|v| v - x, x, x, &SolverConfig::default()).unwrap();
        prop_assert_eq!(result.iterations, 0);
        prop_assert_eq!(result.root, x);
    }

    #[test]
    fn same_sign_bracket_never_yields_root(
        low in -5.0f64..0.0,
        width in 0.01f64..5.0,
        shift in 0.1f64..10.0,
    ) {
        let result = bisection(|v| v * v + shift, low, low + width, &SolverConfig::default());
        let is_invalid_bracket = matches!(result, Err(MathError::InvalidBracket { .. }));
        prop_assert!(is_invalid_bracket);
    }
}
