//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing core domain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A schedule or instrument has no usable periods.
    ///
    /// Raised for empty cash-flow sequences, duplicated period offsets
    /// and instruments whose tenor is shorter than one period.
    #[error("Degenerate schedule: {reason}")]
    DegenerateSchedule {
        /// Description of what makes the schedule degenerate.
        reason: String,
    },

    /// A compounding frequency that cannot discount periodic flows.
    #[error("Unsupported frequency: {periods_per_year} periods per year")]
    UnsupportedFrequency {
        /// The requested number of periods per year.
        periods_per_year: u32,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a degenerate schedule error.
    #[must_use]
    pub fn degenerate_schedule(reason: impl Into<String>) -> Self {
        Self::DegenerateSchedule {
            reason: reason.into(),
        }
    }
}
