//! Day count convention for period counting.
//!
//! Cash-flow schedules are indexed by whole compounding periods. The
//! collaborator that turns calendar dates into those indices uses the
//! 30/360 convention implemented here: every month counts as 30 days and
//! every year as 360.
//!
//! # Usage
//!
//! ```rust
//! use yieldsolve_core::daycounts::{periods_between, DayCount, Thirty360};
//! use yieldsolve_core::types::{Date, Frequency};
//!
//! let settle = Date::from_ymd(2024, 1, 15).unwrap();
//! let maturity = Date::from_ymd(2029, 1, 15).unwrap();
//!
//! assert_eq!(Thirty360.day_count(settle, maturity), 1800);
//! assert_eq!(periods_between(settle, maturity, Frequency::SemiAnnual), 10);
//! ```

mod thirty360;

pub use thirty360::Thirty360;

use crate::types::{Date, Frequency};

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Whole compounding periods from `start` to `end` under 30/360.
///
/// Partial periods are truncated toward zero, so a settlement two
/// months into a coupon period still counts the full remaining periods
/// only.
#[must_use]
pub fn periods_between(start: Date, end: Date, frequency: Frequency) -> i64 {
    Thirty360.day_count(start, end) / frequency.days_per_period()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_between_semiannual() {
        let settle = Date::from_ymd(2023, 3, 1).unwrap();
        let maturity = Date::from_ymd(2033, 3, 1).unwrap();
        assert_eq!(periods_between(settle, maturity, Frequency::SemiAnnual), 20);
        assert_eq!(periods_between(settle, maturity, Frequency::Annual), 10);
    }

    #[test]
    fn test_periods_truncate() {
        // 1 year and 5 months: 510 days -> 2 full half-years
        let settle = Date::from_ymd(2024, 1, 10).unwrap();
        let maturity = Date::from_ymd(2025, 6, 10).unwrap();
        assert_eq!(Thirty360.day_count(settle, maturity), 510);
        assert_eq!(periods_between(settle, maturity, Frequency::SemiAnnual), 2);
    }

    #[test]
    fn test_periods_reversed_dates() {
        let a = Date::from_ymd(2024, 1, 10).unwrap();
        let b = Date::from_ymd(2025, 6, 10).unwrap();
        assert_eq!(periods_between(b, a, Frequency::SemiAnnual), -2);
    }
}
