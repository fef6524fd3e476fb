//! Newton-Raphson root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult, NonConvergenceCause};
use crate::solvers::{FiniteDifference, SolverConfig, SolverResult};

/// Smallest derivative magnitude Newton will divide by.
pub const MIN_DERIVATIVE: f64 = 1e-15;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration: x_{n+1} = x_n - f(x_n) / f'(x_n)
///
/// Has quadratic convergence near the root but requires a good initial
/// guess. The loop stops once `|f(x)| < config.tolerance`, and never runs
/// more than `config.max_iterations` steps.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of f
/// * `x0` - Initial guess
/// * `config` - Solver configuration
///
/// # Errors
///
/// [`MathError::NonConvergence`] when the derivative vanishes, `f` stops
/// being finite, or the iteration cap is reached. The error carries the
/// last iterate and its residual.
///
/// # Example
///
/// ```rust
/// use yieldsolve_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.0, &SolverConfig::precise()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn newton_raphson<F, D>(f: F, df: D, x0: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    try_newton_raphson(
        |x| Ok::<f64, MathError>(f(x)),
        |x| Ok::<f64, MathError>(df(x)),
        x0,
        config,
    )
}

/// Newton-Raphson with a finite-difference derivative.
///
/// Useful when the analytical derivative is not available.
pub fn newton_raphson_numerical<F>(
    f: F,
    x0: f64,
    scheme: FiniteDifference,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    newton_raphson(&f, |x| scheme.derivative(&f, x), x0, config)
}

/// Newton-Raphson over a fallible objective and derivative.
///
/// An `Err` from either closure stops the iteration and is returned
/// unchanged.
pub fn try_newton_raphson<F, D, E>(f: F, df: D, x0: f64, config: &SolverConfig) -> Result<SolverResult, E>
where
    F: Fn(f64) -> Result<f64, E>,
    D: Fn(f64) -> Result<f64, E>,
    E: From<MathError>,
{
    config.validate()?;
    let mut x = x0;

    for iteration in 0..config.max_iterations {
        let fx = f(x)?;
        trace!("newton: iteration {iteration}, f({x}) = {fx:e}");

        if !fx.is_finite() {
            warn!("newton: f({x}) = {fx} is not finite");
            return Err(
                MathError::non_convergence(NonConvergenceCause::NonFinite, iteration, x, fx).into(),
            );
        }

        if fx.abs() < config.tolerance {
            debug!("newton: converged to {x} after {iteration} iterations");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x)?;
        if !dfx.is_finite() || dfx.abs() < MIN_DERIVATIVE {
            warn!("newton: derivative {dfx:e} at {x} is unusable");
            return Err(MathError::non_convergence(
                NonConvergenceCause::FlatDerivative,
                iteration,
                x,
                fx,
            )
            .into());
        }

        x -= fx / dfx;
    }

    let fx = f(x)?;
    if fx.is_finite() && fx.abs() < config.tolerance {
        debug!("newton: converged to {x} on the final step");
        return Ok(SolverResult {
            root: x,
            iterations: config.max_iterations,
            residual: fx,
        });
    }

    let cause = if fx.is_finite() {
        NonConvergenceCause::IterationLimit
    } else {
        NonConvergenceCause::NonFinite
    };
    warn!(
        "newton: no convergence after {} iterations, last iterate {x}",
        config.max_iterations
    );
    Err(MathError::non_convergence(cause, config.max_iterations, x, fx).into())
}
