//! Finite-difference derivative estimates.

use serde::{Deserialize, Serialize};

/// Default finite-difference step.
pub const DEFAULT_FD_STEP: f64 = 1e-5;

/// Finite-difference scheme for approximating `f'(x)`.
///
/// Forward differences cost one extra evaluation per step and are the
/// default. Central differences are second-order accurate at the price of
/// two evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum FiniteDifference {
    /// `(f(x + h) - f(x)) / h`
    Forward {
        /// Step size `h`.
        step: f64,
    },
    /// `(f(x + h) - f(x - h)) / 2h`
    Central {
        /// Step size `h`.
        step: f64,
    },
}

impl Default for FiniteDifference {
    fn default() -> Self {
        Self::forward()
    }
}

impl FiniteDifference {
    /// Forward difference with [`DEFAULT_FD_STEP`].
    #[must_use]
    pub const fn forward() -> Self {
        Self::Forward {
            step: DEFAULT_FD_STEP,
        }
    }

    /// Central difference with [`DEFAULT_FD_STEP`].
    #[must_use]
    pub const fn central() -> Self {
        Self::Central {
            step: DEFAULT_FD_STEP,
        }
    }

    /// Returns the step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        match self {
            Self::Forward { step } | Self::Central { step } => *step,
        }
    }

    /// Same scheme with a different step.
    #[must_use]
    pub fn with_step(self, step: f64) -> Self {
        match self {
            Self::Forward { .. } => Self::Forward { step },
            Self::Central { .. } => Self::Central { step },
        }
    }

    /// Estimates `f'(x)`.
    pub fn derivative<F>(&self, f: F, x: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match *self {
            Self::Forward { step } => (f(x + step) - f(x)) / step,
            Self::Central { step } => (f(x + step) - f(x - step)) / (2.0 * step),
        }
    }

    /// Estimates `f'(x)` for a fallible `f`, returning the first error.
    pub fn try_derivative<F, E>(&self, f: F, x: f64) -> Result<f64, E>
    where
        F: Fn(f64) -> Result<f64, E>,
    {
        match *self {
            Self::Forward { step } => Ok((f(x + step)? - f(x)?) / step),
            Self::Central { step } => Ok((f(x + step)? - f(x - step)?) / (2.0 * step)),
        }
    }
}
