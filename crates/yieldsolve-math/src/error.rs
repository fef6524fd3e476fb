//! Error types for numerical operations.

use std::fmt;

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Why an iterative solver stopped without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonConvergenceCause {
    /// The iteration cap was reached.
    IterationLimit,
    /// The derivative vanished (or stopped being finite), so no step exists.
    FlatDerivative,
    /// The objective returned NaN or an infinity.
    NonFinite,
}

impl fmt::Display for NonConvergenceCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NonConvergenceCause::IterationLimit => "iteration limit reached",
            NonConvergenceCause::FlatDerivative => "derivative is zero or not finite",
            NonConvergenceCause::NonFinite => "objective is not finite",
        };
        write!(f, "{text}")
    }
}

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The endpoints (or a bisection half) do not bracket a sign change.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// An iterative solver stopped without meeting its tolerance.
    #[error(
        "No convergence after {iterations} iterations ({cause}): last iterate {last_iterate}, residual {residual:.2e}"
    )]
    NonConvergence {
        /// Why the solver stopped.
        cause: NonConvergenceCause,
        /// Number of iterations performed.
        iterations: u32,
        /// The iterate the solver stopped at. Not a root.
        last_iterate: f64,
        /// Function value at `last_iterate`.
        residual: f64,
    },

    /// A sampling scan found no sign change anywhere in the range.
    #[error("No sign change in [{low}, {high}] sampled every {step}: no root in range")]
    NoSignChange {
        /// Start of the scanned range.
        low: f64,
        /// End of the scanned range.
        high: f64,
        /// Sampling step.
        step: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(
        cause: NonConvergenceCause,
        iterations: u32,
        last_iterate: f64,
        residual: f64,
    ) -> Self {
        Self::NonConvergence {
            cause,
            iterations,
            last_iterate,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true for any non-convergence outcome.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::NonConvergence { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::non_convergence(NonConvergenceCause::IterationLimit, 100, 0.3, 1e-3);
        let text = err.to_string();
        assert!(text.contains("100 iterations"));
        assert!(text.contains("iteration limit reached"));
        assert!(err.is_non_convergence());
    }

    #[test]
    fn test_no_sign_change_display() {
        let err = MathError::NoSignChange {
            low: 0.0,
            high: 1.0,
            step: 0.005,
        };
        assert!(err.to_string().contains("no root in range"));
        assert!(!err.is_non_convergence());
    }
}
