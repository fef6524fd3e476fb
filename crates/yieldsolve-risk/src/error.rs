//! Error types for risk calculations.

use thiserror::Error;
use yieldsolve_bonds::BondError;
use yieldsolve_core::CoreError;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Division by zero
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Where the zero denominator appeared.
        context: String,
    },

    /// A figure too large (or not finite) for its decimal representation
    #[error("{quantity} of {value} is out of range")]
    OutOfRange {
        /// Which figure overflowed.
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Valuation error from the bonds crate
    #[error("bond error: {0}")]
    Bond(#[from] BondError),
}

impl From<CoreError> for RiskError {
    fn from(err: CoreError) -> Self {
        Self::Bond(BondError::Core(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_wrapped_in_bond_error() {
        let err: RiskError = CoreError::degenerate_schedule("tenor of 0 periods").into();
        assert!(matches!(
            err,
            RiskError::Bond(BondError::Core(CoreError::DegenerateSchedule { .. }))
        ));
        assert!(err.to_string().contains("tenor of 0 periods"));
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = RiskError::DivisionByZero {
            context: "macaulay duration".into(),
        };
        assert_eq!(err.to_string(), "division by zero in macaulay duration");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = RiskError::OutOfRange {
            quantity: "duration",
            value: 1e30,
        };
        assert_eq!(err.to_string(), "duration of 1000000000000000000000000000000 is out of range");
    }
}
