use proptest::prelude::*;
use yieldsolve_config::{DurationSettings, SolverSettings, Validate, MAX_ITERATIONS, MAX_TOLERANCE};

proptest! {
    #[test]
    fn in_range_solver_settings_are_valid(
        tolerance in 1e-15f64..=MAX_TOLERANCE,
        max_iterations in 1u32..=MAX_ITERATIONS,
    ) {
        let settings = SolverSettings { tolerance, max_iterations };
        prop_assert!(settings.is_valid());

        let config = settings.to_solver_config();
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn loose_tolerance_is_invalid(tolerance in (MAX_TOLERANCE * 1.0001)..10.0) {
        let settings = SolverSettings { tolerance, max_iterations: 100 };
        let errors = settings.validate();

        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].field.as_str(), "tolerance");
    }

    #[test]
    fn negative_shock_is_invalid(shock in -1.0f64..-1e-12) {
        let settings = DurationSettings { yield_shock: shock, ..DurationSettings::default() };
        prop_assert!(!settings.is_valid());
    }
}
