//! Property tests for the 30/360 period count.

use proptest::prelude::*;
use yieldsolve_core::daycounts::{periods_between, DayCount, Thirty360};
use yieldsolve_core::types::{Date, Frequency};

fn any_date() -> impl Strategy<Value = Date> {
    (1990i32..2080, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).expect("day <= 28 is always valid"))
}

proptest! {
    #[test]
    fn day_count_is_antisymmetric(a in any_date(), b in any_date()) {
        prop_assert_eq!(Thirty360.day_count(a, b), -Thirty360.day_count(b, a));
    }

    #[test]
    fn day_count_is_additive(a in any_date(), b in any_date(), c in any_date()) {
        prop_assert_eq!(
            Thirty360.day_count(a, b) + Thirty360.day_count(b, c),
            Thirty360.day_count(a, c)
        );
    }

    #[test]
    fn annual_periods_never_exceed_semiannual(a in any_date(), b in any_date()) {
        prop_assume!(a <= b);
        let annual = periods_between(a, b, Frequency::Annual);
        let semi = periods_between(a, b, Frequency::SemiAnnual);
        prop_assert!(semi >= 2 * annual);
        prop_assert!(semi <= 2 * annual + 1);
    }
}
