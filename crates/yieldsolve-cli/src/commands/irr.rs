//! IRR command implementation.
//!
//! Solves for the rate that zeroes the NPV of the schedule given on the
//! command line.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;
use yieldsolve_config::{IrrMethod, IrrSettings, Validate};

use crate::cli::OutputFormat;
use crate::commands::{ScheduleArgs, SolverArgs};
use crate::error::CliError;
use crate::output::{print_single, KeyValue};

/// Root finder selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Bisection over [--low, --high]
    Bisection,
    /// Newton-Raphson from --guess
    Newton,
}

impl From<Method> for IrrMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Bisection => IrrMethod::Bisection,
            Method::Newton => IrrMethod::Newton,
        }
    }
}

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Root finder (default from settings: newton)
    #[arg(short, long, value_enum)]
    pub method: Option<Method>,

    /// Lower end of the bisection bracket
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// Upper end of the bisection bracket
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,

    /// Newton starting rate
    #[arg(long, allow_negative_numbers = true)]
    pub guess: Option<f64>,

    #[command(flatten)]
    pub solver: SolverArgs,
}

impl IrrArgs {
    /// Merges the command-line overrides into the configured defaults.
    fn resolve(&self, defaults: &IrrSettings) -> IrrSettings {
        IrrSettings {
            method: self.method.map_or(defaults.method, IrrMethod::from),
            low: self.low.unwrap_or(defaults.low),
            high: self.high.unwrap_or(defaults.high),
            guess: self.guess.unwrap_or(defaults.guess),
            periods_per_year: self.schedule.frequency.unwrap_or(defaults.periods_per_year),
            solver: self.solver.apply(defaults.solver),
            ..*defaults
        }
    }
}

/// Machine-readable IRR result.
#[derive(Debug, Serialize)]
struct IrrOutput {
    method: IrrMethod,
    periodic_rate: f64,
    nominal_annual: f64,
    effective_annual: f64,
    periods_per_year: u32,
    iterations: u32,
    residual: f64,
}

/// Execute the irr command.
pub fn execute(args: IrrArgs, defaults: &IrrSettings, format: OutputFormat) -> Result<()> {
    let settings = args.resolve(defaults);
    settings.validate_or_error().map_err(CliError::from)?;

    let schedule = args.schedule.schedule(settings.frequency()?)?;
    let calc = settings.calculator();

    let result = match settings.method {
        IrrMethod::Bisection => calc.bisection(&schedule, settings.low, settings.high),
        IrrMethod::Newton => calc.newton(&schedule, settings.guess),
    }
    .with_context(|| format!("{} did not find an IRR", settings.method))?;

    info!(
        "irr: {} converged to {} in {} iterations",
        settings.method, result.periodic_rate, result.iterations
    );

    let output = IrrOutput {
        method: settings.method,
        periodic_rate: result.periodic_rate,
        nominal_annual: result.nominal_annual(),
        effective_annual: result.effective_annual(),
        periods_per_year: result.frequency.periods_per_year(),
        iterations: result.iterations,
        residual: result.residual,
    };

    let rows = vec![
        KeyValue::new("Method", settings.method.to_string()),
        KeyValue::new("Frequency", result.frequency.to_string()),
        KeyValue::from_percent("Periodic Rate", output.periodic_rate),
        KeyValue::from_percent("Nominal Annual", output.nominal_annual),
        KeyValue::from_percent("Effective Annual", output.effective_annual),
        KeyValue::new("Iterations", output.iterations.to_string()),
        KeyValue::new("Residual NPV", format!("{:.3e}", output.residual)),
    ];

    print_single(
        "Internal Rate of Return",
        &output,
        &rows,
        &format!("{:.6}", output.periodic_rate),
        format,
    )
}
