//! Error types for valuation and rate solving.

use thiserror::Error;
use yieldsolve_core::CoreError;
use yieldsolve_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while valuing cash flows or solving for rates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// A discount rate at or below -1, or not finite.
    ///
    /// `(1 + rate)` must be positive for discounting to mean anything.
    #[error("Illegal rate {rate}: discounting requires a finite rate above -1")]
    IllegalRate {
        /// The rejected per-period rate.
        rate: f64,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Root-finding failed.
    #[error("Solver error: {0}")]
    Math(#[from] MathError),
}

impl BondError {
    /// Creates an illegal rate error.
    #[must_use]
    pub fn illegal_rate(rate: f64) -> Self {
        Self::IllegalRate { rate }
    }

    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Returns true if the solver ran out of iterations or stalled.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::Math(err) if err.is_non_convergence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldsolve_math::NonConvergenceCause;

    #[test]
    fn test_error_display() {
        let err = BondError::illegal_rate(-1.5);
        assert!(err.to_string().contains("-1.5"));

        let err = BondError::invalid_spec("price must be positive");
        assert!(err.to_string().contains("price must be positive"));
    }

    #[test]
    fn test_from_core_error() {
        let err: BondError = CoreError::degenerate_schedule("tenor is 0 periods").into();
        assert!(matches!(
            err,
            BondError::Core(CoreError::DegenerateSchedule { .. })
        ));
    }

    #[test]
    fn test_non_convergence_passthrough() {
        let err: BondError =
            MathError::non_convergence(NonConvergenceCause::IterationLimit, 100, 0.2, 1.0).into();
        assert!(err.is_non_convergence());
        assert!(!BondError::illegal_rate(-2.0).is_non_convergence());
    }
}
