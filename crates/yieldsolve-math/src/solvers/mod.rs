//! Root-finding algorithms.
//!
//! This module provides the numerical solvers used to back out rates from
//! discounted-cash-flow prices:
//!
//! - [`bisection`]: Bracketing method, needs a sign change across `[low, high]`
//! - [`newton_raphson`]: Quadratic convergence when a derivative is available
//! - [`newton_raphson_numerical`]: Newton with a [`FiniteDifference`] derivative
//! - [`scan_sign_changes`]: Locates brackets by sampling; never bisects
//!
//! Each solver has a `try_` twin that accepts a fallible objective
//! (`Fn(f64) -> Result<f64, E>`). An error from the objective stops the
//! solve and is returned unchanged, which is how a pricing function can
//! reject an illegal rate mid-iteration.
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative, seed |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use yieldsolve_math::solvers::{bisection, newton_raphson, SolverConfig};
//!
//! // Bond: 5% coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);  // Coupon
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);    // Principal
//!     pv - 95.0
//! };
//!
//! let d_price_fn = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= f64::from(t) * 5.0 / (1.0 + y).powi(t + 1);
//!     }
//!     dpv -= 5.0 * 100.0 / (1.0 + y).powi(6);
//!     dpv
//! };
//!
//! let config = SolverConfig::precise();
//! let newton = newton_raphson(price_fn, d_price_fn, 0.05, &config).unwrap();
//! let bisect = bisection(price_fn, 0.0, 0.20, &config).unwrap();
//! assert!(newton.root > 0.05);  // YTM > coupon rate for discount bond
//! assert!((newton.root - bisect.root).abs() < 1e-5);
//! ```

mod bisection;
mod derivative;
mod newton;
mod scan;

pub use bisection::{bisection, try_bisection};
pub use derivative::{FiniteDifference, DEFAULT_FD_STEP};
pub use newton::{newton_raphson, newton_raphson_numerical, try_newton_raphson, MIN_DERIVATIVE};
pub use scan::{grid_intervals, sample, scan_sign_changes, Bracket, MAX_SCAN_SAMPLES};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default absolute tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Tolerance for higher-precision use, such as bond yields.
pub const PRECISE_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// For bisection the tolerance bounds the bracket width; for Newton it
/// bounds `|f(x)|`. Both solvers stop at `max_iterations`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Configuration with [`PRECISE_TOLERANCE`].
    #[must_use]
    pub fn precise() -> Self {
        Self::new(PRECISE_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is a finite, non-negative number.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Trait for root-finding solvers with optional derivative.
///
/// This trait provides a unified interface over the solvers, so a caller
/// can pick the method at runtime and optionally provide a derivative.
/// Objectives are fallible; infallible closures return
/// `Ok::<f64, MathError>(..)`.
///
/// # Example
///
/// ```rust
/// use yieldsolve_math::solvers::{Solver, NewtonSolver, SolverConfig};
/// use yieldsolve_math::MathError;
///
/// let solver = NewtonSolver::default();
/// let f = |x: f64| Ok::<f64, MathError>(x * x - 2.0);
/// let df = |x: f64| Ok::<f64, MathError>(2.0 * x);
///
/// let result = solver.solve(f, Some(df), 1.5, None, &SolverConfig::precise()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub trait Solver: Send + Sync {
    /// Solves for a root of the given function.
    ///
    /// # Arguments
    ///
    /// * `f` - The function for which to find a root
    /// * `derivative` - Optional derivative function (used if available)
    /// * `initial_guess` - Starting point for the search
    /// * `bounds` - Optional bracketing interval (a, b)
    /// * `config` - Solver configuration
    fn solve<F, D, E>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> Result<SolverResult, E>
    where
        F: Fn(f64) -> Result<f64, E>,
        D: Fn(f64) -> Result<f64, E>,
        E: From<MathError>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson solver implementation.
///
/// Falls back to the [`FiniteDifference`] scheme when no derivative is
/// supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver {
    /// Derivative estimate used when the caller has no analytic one.
    pub finite_difference: FiniteDifference,
}

impl Solver for NewtonSolver {
    fn solve<F, D, E>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        _bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> Result<SolverResult, E>
    where
        F: Fn(f64) -> Result<f64, E>,
        D: Fn(f64) -> Result<f64, E>,
        E: From<MathError>,
    {
        match derivative {
            Some(df) => try_newton_raphson(f, df, initial_guess, config),
            None => {
                let scheme = self.finite_difference;
                try_newton_raphson(&f, |x| scheme.try_derivative(&f, x), initial_guess, config)
            }
        }
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Bisection solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl Solver for BisectionSolver {
    fn solve<F, D, E>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> Result<SolverResult, E>
    where
        F: Fn(f64) -> Result<f64, E>,
        D: Fn(f64) -> Result<f64, E>,
        E: From<MathError>,
    {
        let (a, b) = bounds.unwrap_or((initial_guess - 1.0, initial_guess + 1.0));
        try_bisection(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// A converged root.
///
/// A `SolverResult` only exists for a solve that met its tolerance;
/// every other outcome is a [`MathError`], so `Ok(_)` is the converged
/// flag. A solve that stops short is [`MathError::NonConvergence`], which
/// carries the iteration count, last iterate and residual instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
