//! Scan command implementation.
//!
//! Samples the NPV of a schedule on a rate grid, reports every sign change
//! and refines each one by bisection.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;
use yieldsolve_bonds::pricing::{ScheduleValuation, ValuationFunction};
use yieldsolve_config::{IrrSettings, Validate};
use yieldsolve_math::solvers::{sample, scan_sign_changes, Bracket};
use yieldsolve_math::MathError;

use crate::cli::OutputFormat;
use crate::commands::{fixed6, opt6, ScheduleArgs, SolverArgs};
use crate::error::CliError;
use crate::output::{print_csv, print_header, print_json, print_table};

/// Arguments for the scan command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Start of the rate grid
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// End of the rate grid
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,

    /// Grid spacing
    #[arg(long)]
    pub step: Option<f64>,

    /// Only print the sign changes
    #[arg(long)]
    pub brackets_only: bool,

    #[command(flatten)]
    pub solver: SolverArgs,
}

impl ScanArgs {
    fn resolve(&self, defaults: &IrrSettings) -> IrrSettings {
        IrrSettings {
            low: self.low.unwrap_or(defaults.low),
            high: self.high.unwrap_or(defaults.high),
            scan_step: self.step.unwrap_or(defaults.scan_step),
            periods_per_year: self.schedule.frequency.unwrap_or(defaults.periods_per_year),
            solver: self.solver.apply(defaults.solver),
            ..*defaults
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct GridRow {
    #[tabled(rename = "Rate", display_with = "fixed6")]
    rate: f64,
    #[tabled(rename = "NPV", display_with = "opt6")]
    npv: Option<f64>,
}

#[derive(Debug, Serialize, Tabled)]
struct BracketRow {
    #[tabled(rename = "Low", display_with = "fixed6")]
    low: f64,
    #[tabled(rename = "High", display_with = "fixed6")]
    high: f64,
    #[tabled(rename = "NPV(Low)", display_with = "fixed6")]
    npv_low: f64,
    #[tabled(rename = "NPV(High)", display_with = "fixed6")]
    npv_high: f64,
    #[tabled(rename = "Root", display_with = "opt6")]
    root: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ScanOutput<'a> {
    low: f64,
    high: f64,
    step: f64,
    grid: &'a [GridRow],
    brackets: &'a [BracketRow],
}

/// Execute the scan command.
pub fn execute(args: ScanArgs, defaults: &IrrSettings, format: OutputFormat) -> Result<()> {
    let settings = args.resolve(defaults);
    settings.validate_or_error().map_err(CliError::from)?;

    let schedule = args.schedule.schedule(settings.frequency()?)?;
    let npv = ScheduleValuation::npv(&schedule);
    // Rates the valuation rejects are skipped by the scan
    let f = |r: f64| npv.value(r).unwrap_or(f64::NAN);
    let (low, high, step) = (settings.low, settings.high, settings.scan_step);

    let grid: Vec<GridRow> = sample(f, low, high, step)?
        .into_iter()
        .map(|(rate, value)| GridRow {
            rate,
            npv: value.is_finite().then_some(value),
        })
        .collect();

    let brackets = match scan_sign_changes(f, low, high, step) {
        Ok(brackets) => brackets,
        Err(MathError::NoSignChange { .. }) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    let calc = settings.calculator();
    let rows: Vec<BracketRow> = brackets
        .iter()
        .map(|bracket: &Bracket| {
            let root = match calc.bisection(&schedule, bracket.low, bracket.high) {
                Ok(result) => Some(result.periodic_rate),
                Err(e) => {
                    warn!("scan: bracket [{}, {}] did not refine: {e}", bracket.low, bracket.high);
                    None
                }
            };
            BracketRow {
                low: bracket.low,
                high: bracket.high,
                npv_low: bracket.f_low,
                npv_high: bracket.f_high,
                root,
            }
        })
        .collect();

    match format {
        OutputFormat::Table => {
            if !args.brackets_only {
                print_header("NPV Grid");
                print_table(&grid)?;
            }
            print_header("Sign Changes");
            if rows.is_empty() {
                println!("No root in [{low}, {high}] at step {step}.");
            } else {
                print_table(&rows)?;
            }
        }
        OutputFormat::Json => {
            let grid: &[GridRow] = if args.brackets_only { &[] } else { &grid };
            print_json(&ScanOutput {
                low,
                high,
                step,
                grid,
                brackets: &rows,
            })?;
        }
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Minimal => {
            if rows.is_empty() {
                println!("no root");
            }
            for row in &rows {
                println!("{}", opt6(&row.root));
            }
        }
    }

    Ok(())
}
