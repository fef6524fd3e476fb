//! Sign-change scanning.
//!
//! A coarse grid search that reports where `f` changes sign. It never
//! bisects; the brackets it returns are meant to seed [`super::bisection`]
//! or to explain why no root exists in a range.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Largest grid [`sample`] will evaluate.
pub const MAX_SCAN_SAMPLES: usize = 100_000;

/// Number of grid intervals between `low` and `high` at `step`.
///
/// # Errors
///
/// [`MathError::InvalidInput`] when the grid would exceed
/// [`MAX_SCAN_SAMPLES`] points.
pub fn grid_intervals(low: f64, high: f64, step: f64) -> MathResult<usize> {
    let intervals = ((high - low) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SCAN_SAMPLES as f64 {
        return Err(MathError::invalid_input(format!(
            "scan of [{low}, {high}] at step {step} exceeds {MAX_SCAN_SAMPLES} samples"
        )));
    }
    Ok(intervals as usize)
}

/// An interval across which `f` changes sign (or hits zero at `high`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Lower end.
    pub low: f64,
    /// Upper end.
    pub high: f64,
    /// `f(low)`.
    pub f_low: f64,
    /// `f(high)`.
    pub f_high: f64,
}

impl Bracket {
    /// Midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Width of the bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Samples `f` on the grid `low, low + step, ...` up to `high`.
///
/// Grid points are computed as `low + i * step` so rounding does not
/// accumulate across the range.
///
/// # Errors
///
/// [`MathError::InvalidInput`] when `step` is not a positive finite
/// number, the range is empty or not finite, or the grid would hold more
/// than [`MAX_SCAN_SAMPLES`] points.
pub fn sample<F>(f: F, low: f64, high: f64, step: f64) -> MathResult<Vec<(f64, f64)>>
where
    F: Fn(f64) -> f64,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(MathError::invalid_input(format!(
            "scan step must be positive, got {step}"
        )));
    }
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(MathError::invalid_input(format!(
            "scan range [{low}, {high}] is not a valid interval"
        )));
    }

    let count = grid_intervals(low, high, step)?;
    Ok((0..=count)
        .map(|i| {
            let x = low + i as f64 * step;
            (x, f(x))
        })
        .collect())
}

/// Finds every sign change of `f` on a fixed-step grid over `[low, high]`.
///
/// Consecutive samples `(a, b)` form a bracket when their signs differ or
/// when `f(b)` is exactly zero. A zero at the very first sample is reported
/// as the point bracket `[low, low]`. Pairs with a non-finite sample are
/// skipped.
///
/// # Errors
///
/// * [`MathError::NoSignChange`] when no consecutive pair changes sign
/// * [`MathError::InvalidInput`] for a bad step or range (see [`sample`])
///
/// # Example
///
/// ```rust
/// use yieldsolve_math::solvers::scan_sign_changes;
///
/// let f = |r: f64| 9702.0 - 19700.0 / (1.0 + r) + 10000.0 / (1.0 + r).powi(2);
/// let brackets = scan_sign_changes(f, 0.0, 0.03, 0.001).unwrap();
///
/// assert_eq!(brackets.len(), 2);
/// assert!(brackets[0].low < 0.0102 && brackets[0].high > 0.0101);
/// ```
pub fn scan_sign_changes<F>(f: F, low: f64, high: f64, step: f64) -> MathResult<Vec<Bracket>>
where
    F: Fn(f64) -> f64,
{
    let points = sample(f, low, high, step)?;
    let mut brackets = Vec::new();

    if let Some(&(x0, f0)) = points.first() {
        if f0 == 0.0 {
            brackets.push(Bracket {
                low: x0,
                high: x0,
                f_low: f0,
                f_high: f0,
            });
        }
    }

    for pair in points.windows(2) {
        let (a, fa) = pair[0];
        let (b, fb) = pair[1];
        if !fa.is_finite() || !fb.is_finite() {
            continue;
        }
        let crosses = fa != 0.0 && fb != 0.0 && fa.signum() != fb.signum();
        if crosses || fb == 0.0 {
            brackets.push(Bracket {
                low: a,
                high: b,
                f_low: fa,
                f_high: fb,
            });
        }
    }

    if brackets.is_empty() {
        debug!("scan: no sign change in [{low}, {high}] at step {step}");
        return Err(MathError::NoSignChange { low, high, step });
    }

    debug!(
        "scan: {} sign change(s) in [{low}, {high}] at step {step}",
        brackets.len()
    );
    Ok(brackets)
}
