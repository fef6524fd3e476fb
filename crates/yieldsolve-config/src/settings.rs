//! Solver, IRR, YTM and duration settings.
//!
//! Every field has a default, so a settings file only needs to name the
//! values it changes:
//!
//! ```toml
//! [irr]
//! method = "bisection"
//! low = 0.0
//! high = 0.015
//!
//! [ytm.solver]
//! tolerance = 1e-8
//! ```

use std::fmt;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use yieldsolve_bonds::pricing::{IrrCalculator, YieldSolver, DEFAULT_INITIAL_GUESS};
use yieldsolve_core::types::Frequency;
use yieldsolve_core::CoreResult;
use yieldsolve_math::solvers::{
    grid_intervals, FiniteDifference, SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, PRECISE_TOLERANCE,
};
use yieldsolve_risk::calculator::{DurationCalculator, DEFAULT_PARALLEL_THRESHOLD};
use yieldsolve_risk::scenarios::DEFAULT_YIELD_SHOCK;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Largest accepted solver tolerance.
pub const MAX_TOLERANCE: f64 = 0.01;

/// Largest accepted iteration cap.
pub const MAX_ITERATIONS: u32 = 10_000;

// =============================================================================
// Solver
// =============================================================================

/// Stopping rule for a root finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Convergence tolerance.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverSettings {
    /// Settings with a 1e-6 tolerance.
    #[must_use]
    pub fn precise() -> Self {
        Self {
            tolerance: PRECISE_TOLERANCE,
            ..Self::default()
        }
    }

    /// The equivalent solver configuration.
    #[must_use]
    pub fn to_solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

impl From<SolverSettings> for SolverConfig {
    fn from(settings: SolverSettings) -> Self {
        settings.to_solver_config()
    }
}

impl From<SolverConfig> for SolverSettings {
    fn from(config: SolverConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance > MAX_TOLERANCE {
            errors.push(ValidationError::with_rule(
                "tolerance",
                format!("must be in (0, {MAX_TOLERANCE}], got {}", self.tolerance),
                "range",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS {
            errors.push(ValidationError::with_rule(
                "max_iterations",
                format!(
                    "must be between 1 and {MAX_ITERATIONS}, got {}",
                    self.max_iterations
                ),
                "range",
            ));
        }

        errors
    }
}

// =============================================================================
// IRR
// =============================================================================

/// Root finder used for IRR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrMethod {
    /// Bisection over `[low, high]`.
    Bisection,
    /// Newton-Raphson from `guess`.
    #[default]
    Newton,
}

impl fmt::Display for IrrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrMethod::Bisection => write!(f, "bisection"),
            IrrMethod::Newton => write!(f, "newton"),
        }
    }
}

/// IRR defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSettings {
    /// Root finder.
    #[serde(default)]
    pub method: IrrMethod,

    /// Lower end of the bisection bracket and the scan range.
    #[serde(default)]
    pub low: f64,

    /// Upper end of the bisection bracket and the scan range.
    #[serde(default = "default_irr_high")]
    pub high: f64,

    /// Newton starting point.
    #[serde(default)]
    pub guess: f64,

    /// Grid step for sign-change scans.
    #[serde(default = "default_scan_step")]
    pub scan_step: f64,

    /// Compounding periods per year of the cash flows.
    #[serde(default = "default_irr_periods_per_year")]
    pub periods_per_year: u32,

    /// Stopping rule.
    #[serde(default)]
    pub solver: SolverSettings,
}

fn default_irr_high() -> f64 {
    1.0
}

fn default_scan_step() -> f64 {
    0.005
}

fn default_irr_periods_per_year() -> u32 {
    1
}

impl Default for IrrSettings {
    fn default() -> Self {
        Self {
            method: IrrMethod::default(),
            low: 0.0,
            high: default_irr_high(),
            guess: 0.0,
            scan_step: default_scan_step(),
            periods_per_year: default_irr_periods_per_year(),
            solver: SolverSettings::default(),
        }
    }
}

impl IrrSettings {
    /// Calculator using these settings' stopping rule.
    #[must_use]
    pub fn calculator(&self) -> IrrCalculator {
        IrrCalculator::new(self.solver.into())
    }

    /// Compounding frequency of the cash flows.
    pub fn frequency(&self) -> CoreResult<Frequency> {
        Frequency::from_periods_per_year(self.periods_per_year)
    }
}

impl Validate for IrrSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<_> = self
            .solver
            .validate()
            .into_iter()
            .map(|e| e.nested("solver"))
            .collect();

        if !self.low.is_finite() || self.low <= -1.0 {
            errors.push(ValidationError::with_rule(
                "low",
                format!("must be finite and above -1, got {}", self.low),
                "rate",
            ));
        }

        if !self.high.is_finite() || self.high <= self.low {
            errors.push(ValidationError::new(
                "high",
                format!("must be finite and above low ({}), got {}", self.low, self.high),
            ));
        }

        if !self.guess.is_finite() || self.guess <= -1.0 {
            errors.push(ValidationError::with_rule(
                "guess",
                format!("must be finite and above -1, got {}", self.guess),
                "rate",
            ));
        }

        if !self.scan_step.is_finite() || self.scan_step <= 0.0 {
            errors.push(ValidationError::with_rule(
                "scan_step",
                format!("must be positive, got {}", self.scan_step),
                "positive",
            ));
        } else if self.low.is_finite() && self.high.is_finite() && self.high > self.low {
            if let Err(e) = grid_intervals(self.low, self.high, self.scan_step) {
                errors.push(ValidationError::with_rule("scan_step", e.to_string(), "range"));
            }
        }

        if let Err(e) = self.frequency() {
            errors.push(ValidationError::new("periods_per_year", e.to_string()));
        }

        errors
    }
}

// =============================================================================
// YTM
// =============================================================================

/// Yield-to-maturity defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YtmSettings {
    /// Newton starting yield.
    #[serde(default = "default_ytm_guess")]
    pub initial_guess: f64,

    /// Face value of every bond.
    #[serde(default = "default_face_value")]
    pub face_value: f64,

    /// Coupons per year.
    #[serde(default = "default_ytm_periods_per_year")]
    pub periods_per_year: u32,

    /// Stopping rule.
    #[serde(default = "SolverSettings::precise")]
    pub solver: SolverSettings,

    /// Derivative estimate for Newton.
    #[serde(default)]
    pub finite_difference: FiniteDifference,
}

fn default_ytm_guess() -> f64 {
    DEFAULT_INITIAL_GUESS
}

fn default_face_value() -> f64 {
    100.0
}

fn default_ytm_periods_per_year() -> u32 {
    2
}

impl Default for YtmSettings {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            face_value: default_face_value(),
            periods_per_year: default_ytm_periods_per_year(),
            solver: SolverSettings::precise(),
            finite_difference: FiniteDifference::default(),
        }
    }
}

impl YtmSettings {
    /// Solver configured from these settings.
    #[must_use]
    pub fn solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_config(self.solver.into())
            .with_initial_guess(self.initial_guess)
            .with_finite_difference(self.finite_difference)
    }

    /// Coupon frequency.
    pub fn frequency(&self) -> CoreResult<Frequency> {
        Frequency::from_periods_per_year(self.periods_per_year)
    }
}

impl Validate for YtmSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<_> = self
            .solver
            .validate()
            .into_iter()
            .map(|e| e.nested("solver"))
            .collect();

        if !self.initial_guess.is_finite() {
            errors.push(ValidationError::new(
                "initial_guess",
                format!("must be finite, got {}", self.initial_guess),
            ));
        }

        if !self.face_value.is_finite() || self.face_value <= 0.0 {
            errors.push(ValidationError::with_rule(
                "face_value",
                format!("must be positive, got {}", self.face_value),
                "positive",
            ));
        }

        if let Err(e) = self.frequency() {
            errors.push(ValidationError::new("periods_per_year", e.to_string()));
        }

        let step = self.finite_difference.step();
        if !step.is_finite() || step <= 0.0 {
            errors.push(ValidationError::with_rule(
                "finite_difference.step",
                format!("must be positive, got {step}"),
                "positive",
            ));
        }

        errors
    }
}

// =============================================================================
// Duration
// =============================================================================

/// Duration engine defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationSettings {
    /// Yield move for the shocked durations.
    #[serde(default = "default_yield_shock")]
    pub yield_shock: f64,

    /// Batch length from which records are processed in parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_yield_shock() -> f64 {
    DEFAULT_YIELD_SHOCK
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for DurationSettings {
    fn default() -> Self {
        Self {
            yield_shock: DEFAULT_YIELD_SHOCK,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl DurationSettings {
    /// Calculator configured from these settings.
    #[must_use]
    pub fn calculator(&self) -> DurationCalculator {
        DurationCalculator::new()
            .with_shock(self.yield_shock)
            .with_parallel_threshold(self.parallel_threshold)
    }
}

impl Validate for DurationSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.yield_shock.is_finite() || self.yield_shock < 0.0 {
            errors.push(ValidationError::with_rule(
                "yield_shock",
                format!("must be finite and non-negative, got {}", self.yield_shock),
                "non_negative",
            ));
        }

        if self.parallel_threshold == 0 {
            errors.push(ValidationError::new(
                "parallel_threshold",
                "must be at least 1",
            ));
        }

        errors
    }
}

// =============================================================================
// Settings
// =============================================================================

/// All settings, one section per command.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// IRR and scan settings.
    #[serde(default)]
    pub irr: IrrSettings,

    /// Yield-to-maturity settings.
    #[serde(default)]
    pub ytm: YtmSettings,

    /// Duration settings.
    #[serde(default)]
    pub duration: DurationSettings,
}

impl Settings {
    /// Loads and validates settings from a `.toml` or `.json` file.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Io` if the file cannot be read
    /// * `ConfigError::UnsupportedFormat` for any other extension
    /// * `ConfigError::Deserialization` for malformed content
    /// * `ConfigError::Validation` / `MultipleValidationErrors` for
    ///   out-of-range values
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = parse(&content)?;
        debug!("config: loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parses and validates TOML settings.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate_or_error()?;
        Ok(settings)
    }

    /// Parses and validates JSON settings.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate_or_error()?;
        Ok(settings)
    }

    /// Renders the settings as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Vec<ValidationError> {
        let irr = self.irr.validate().into_iter().map(|e| e.nested("irr"));
        let ytm = self.ytm.validate().into_iter().map(|e| e.nested("ytm"));
        let duration = self
            .duration
            .validate()
            .into_iter()
            .map(|e| e.nested("duration"));

        irr.chain(ytm).chain(duration).collect()
    }
}
