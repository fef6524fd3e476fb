//! Bisection root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult, NonConvergenceCause};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that works by repeatedly
/// halving the interval and keeping the half whose endpoints still
/// straddle a sign change. Iteration stops once the bracket is no wider
/// than `config.tolerance`; the root is the last midpoint computed.
///
/// Requires `f(low)` and `f(high)` to have opposite signs, unless the
/// interval is already narrower than the tolerance, in which case its
/// midpoint is returned without any iteration.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `low` - Lower bound of the bracket
/// * `high` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::InvalidBracket`] if the endpoints share a sign, or if
///   neither half brackets a sign change during iteration
/// * [`MathError::NonConvergence`] if `f` stops being finite or the
///   iteration cap is reached
///
/// # Example
///
/// ```rust
/// use yieldsolve_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::new(1e-10, 100)).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, low: f64, high: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    try_bisection(|x| Ok::<f64, MathError>(f(x)), low, high, config)
}

/// Bisection over a fallible objective.
///
/// Behaves exactly like [`bisection`], except that an `Err` returned by
/// `f` stops the search and is handed back unchanged.
pub fn try_bisection<F, E>(f: F, low: f64, high: f64, config: &SolverConfig) -> Result<SolverResult, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<MathError>,
{
    config.validate()?;
    if !low.is_finite() || !high.is_finite() {
        return Err(MathError::invalid_input(format!(
            "bracket endpoints must be finite, got [{low}, {high}]"
        ))
        .into());
    }

    let mut lo = low.min(high);
    let mut hi = low.max(high);

    // Degenerate interval: already converged
    if hi - lo <= config.tolerance {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid)?;
        debug!("bisection: degenerate bracket [{lo}, {hi}], root {mid}");
        return Ok(SolverResult {
            root: mid,
            iterations: 0,
            residual: f_mid,
        });
    }

    let mut f_lo = f(lo)?;
    let mut f_hi = f(hi)?;

    if !f_lo.is_finite() {
        return Err(not_finite(0, lo, f_lo).into());
    }
    if !f_hi.is_finite() {
        return Err(not_finite(0, hi, f_hi).into());
    }

    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    if !opposite_signs(f_lo, f_hi) {
        warn!("bisection: f({lo}) = {f_lo:e} and f({hi}) = {f_hi:e} do not bracket a root");
        return Err(invalid_bracket(lo, hi, f_lo, f_hi).into());
    }

    let mut iterations = 0;
    loop {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid)?;
        iterations += 1;
        trace!("bisection: iteration {iterations}, [{lo}, {hi}], f({mid}) = {f_mid:e}");

        if !f_mid.is_finite() {
            return Err(not_finite(iterations, mid, f_mid).into());
        }

        if f_mid == 0.0 {
            debug!("bisection: exact root {mid} after {iterations} iterations");
            return Ok(SolverResult {
                root: mid,
                iterations,
                residual: f_mid,
            });
        }

        if opposite_signs(f_lo, f_mid) {
            hi = mid;
            f_hi = f_mid;
        } else if opposite_signs(f_hi, f_mid) {
            lo = mid;
            f_lo = f_mid;
        } else {
            warn!("bisection: neither half of [{lo}, {hi}] brackets a root");
            return Err(invalid_bracket(lo, hi, f_lo, f_hi).into());
        }

        if hi - lo <= config.tolerance {
            debug!("bisection: converged to {mid} after {iterations} iterations");
            return Ok(SolverResult {
                root: mid,
                iterations,
                residual: f_mid,
            });
        }

        if iterations >= config.max_iterations {
            warn!("bisection: no convergence after {iterations} iterations");
            return Err(MathError::non_convergence(
                NonConvergenceCause::IterationLimit,
                iterations,
                mid,
                f_mid,
            )
            .into());
        }
    }
}

/// Sign comparison that cannot underflow the way `a * b < 0.0` can.
fn opposite_signs(a: f64, b: f64) -> bool {
    a.signum() != b.signum()
}

fn invalid_bracket(a: f64, b: f64, fa: f64, fb: f64) -> MathError {
    MathError::InvalidBracket { a, b, fa, fb }
}

fn not_finite(iterations: u32, x: f64, fx: f64) -> MathError {
    warn!("bisection: f({x}) = {fx} is not finite");
    MathError::non_convergence(NonConvergenceCause::NonFinite, iterations, x, fx)
}
