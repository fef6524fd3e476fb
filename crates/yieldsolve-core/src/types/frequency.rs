//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Number of compounding periods per year.
///
/// The period is the unit every offset in a
/// [`CashFlowSchedule`](super::CashFlowSchedule) is expressed in: an
/// annual schedule discounts once per year, a semi-annual bond once per
/// half-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual compounding (1 per year)
    Annual,
    /// Semi-annual compounding (2 per year) - most common for US bonds
    #[default]
    SemiAnnual,
    /// Quarterly compounding (4 per year)
    Quarterly,
    /// Monthly compounding (12 per year)
    Monthly,
}

impl Frequency {
    /// Creates a frequency from the number of periods per year.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedFrequency` for anything other than
    /// 1, 2, 4 or 12.
    pub fn from_periods_per_year(periods_per_year: u32) -> CoreResult<Self> {
        match periods_per_year {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            12 => Ok(Frequency::Monthly),
            _ => Err(CoreError::UnsupportedFrequency { periods_per_year }),
        }
    }

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns the length of one period in 30/360 days.
    ///
    /// 180 for semi-annual, 360 for annual.
    #[must_use]
    pub fn days_per_period(&self) -> i64 {
        360 / i64::from(self.periods_per_year())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
