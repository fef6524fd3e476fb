//! YTM command implementation.
//!
//! Reads a bond file and solves for each bond's yield to maturity, then
//! splits its quoted price into clean, accrued and dirty.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tracing::warn;
use yieldsolve_bonds::cashflows::{accrued_interest, PriceBreakdown};
use yieldsolve_bonds::instruments::FixedRateBond;
use yieldsolve_bonds::pricing::YieldSolver;
use yieldsolve_config::{Validate, YtmSettings};
use yieldsolve_core::types::Frequency;

use crate::cli::OutputFormat;
use crate::commands::{opt4, opt6, parse_date, read_records, SolverArgs};
use crate::error::CliError;
use crate::output::{display_option, print_output, print_warning};

/// Arguments for the ytm command.
#[derive(Args, Debug)]
pub struct YtmArgs {
    /// Bond file: issuer_id, maturity_date, offering_date, price,
    /// offering_yield, delivery_date, coupon_rate
    #[arg(short = 'i', long)]
    pub file: PathBuf,

    /// Face value of every bond
    #[arg(long)]
    pub face: Option<f64>,

    /// Newton starting yield
    #[arg(long)]
    pub guess: Option<f64>,

    /// Coupons per year: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long)]
    pub frequency: Option<u32>,

    #[command(flatten)]
    pub solver: SolverArgs,
}

impl YtmArgs {
    fn resolve(&self, defaults: &YtmSettings) -> YtmSettings {
        YtmSettings {
            initial_guess: self.guess.unwrap_or(defaults.initial_guess),
            face_value: self.face.unwrap_or(defaults.face_value),
            periods_per_year: self.frequency.unwrap_or(defaults.periods_per_year),
            solver: self.solver.apply(defaults.solver),
            ..*defaults
        }
    }
}

/// One line of the bond file. Dates are YYYY/MM/DD; the coupon is a
/// percentage. The offering date column is not used.
#[derive(Debug, Clone, Deserialize)]
struct BondRecord {
    issuer_id: String,
    maturity_date: String,
    price: f64,
    offering_yield: f64,
    delivery_date: String,
    coupon_rate: f64,
}

/// Solved figures for one bond.
#[derive(Debug, Clone, Copy)]
struct YtmFigures {
    ytm: f64,
    iterations: u32,
    prices: PriceBreakdown,
}

fn solve_record(
    record: &BondRecord,
    settings: &YtmSettings,
    solver: &YieldSolver,
    frequency: Frequency,
) -> Result<YtmFigures> {
    let settlement = parse_date(&record.delivery_date)?;
    let maturity = parse_date(&record.maturity_date)?;

    let bond = FixedRateBond::from_dates(
        settings.face_value,
        record.coupon_rate / 100.0,
        frequency,
        settlement,
        maturity,
    )?;
    let result = solver.solve(&bond, record.price)?;
    let accrued = accrued_interest(settlement, maturity, bond.coupon_per_period(), frequency)?;

    Ok(YtmFigures {
        ytm: result.yield_value,
        iterations: result.iterations,
        prices: PriceBreakdown::from_clean(record.price, accrued),
    })
}

#[derive(Debug, Serialize, Tabled)]
struct YtmRow {
    #[tabled(rename = "Bond")]
    bond: usize,
    #[tabled(rename = "Issuer")]
    issuer_id: String,
    #[tabled(rename = "Offering Yield", display_with = "opt4")]
    offering_yield: Option<f64>,
    #[tabled(rename = "YTM %", display_with = "opt6")]
    ytm_percent: Option<f64>,
    #[tabled(rename = "Iterations", display_with = "display_option")]
    iterations: Option<u32>,
    #[tabled(rename = "Clean", display_with = "opt6")]
    clean_price: Option<f64>,
    #[tabled(rename = "Accrued", display_with = "opt6")]
    accrued: Option<f64>,
    #[tabled(rename = "Dirty", display_with = "opt6")]
    dirty_price: Option<f64>,
    #[tabled(rename = "Converged")]
    converged: bool,
    #[tabled(rename = "Error", display_with = "display_option")]
    error: Option<String>,
}

impl YtmRow {
    fn solved(bond: usize, record: BondRecord, figures: YtmFigures) -> Self {
        Self {
            bond,
            issuer_id: record.issuer_id,
            offering_yield: Some(record.offering_yield),
            ytm_percent: Some(figures.ytm * 100.0),
            iterations: Some(figures.iterations),
            clean_price: Some(figures.prices.clean),
            accrued: Some(figures.prices.accrued),
            dirty_price: Some(figures.prices.dirty),
            converged: true,
            error: None,
        }
    }

    fn failed(bond: usize, issuer_id: String, offering_yield: Option<f64>, error: String) -> Self {
        Self {
            bond,
            issuer_id,
            offering_yield,
            ytm_percent: None,
            iterations: None,
            clean_price: None,
            accrued: None,
            dirty_price: None,
            converged: false,
            error: Some(error),
        }
    }
}

/// Execute the ytm command.
pub fn execute(args: YtmArgs, defaults: &YtmSettings, format: OutputFormat) -> Result<()> {
    let settings = args.resolve(defaults);
    settings.validate_or_error().map_err(CliError::from)?;

    let frequency = settings.frequency()?;
    let solver = settings.solver();
    let records = read_records::<BondRecord>(&args.file)?;

    let rows: Vec<YtmRow> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let bond = index + 1;
            match record {
                Ok(record) => match solve_record(&record, &settings, &solver, frequency) {
                    Ok(figures) => YtmRow::solved(bond, record, figures),
                    Err(e) => {
                        warn!("ytm: bond {bond} ({}): {e:#}", record.issuer_id);
                        let offering_yield = Some(record.offering_yield);
                        YtmRow::failed(bond, record.issuer_id, offering_yield, format!("{e:#}"))
                    }
                },
                Err(e) => {
                    warn!("ytm: bond {bond}: {e}");
                    YtmRow::failed(bond, String::new(), None, e)
                }
            }
        })
        .collect();

    print_output(&rows, format, |row| match row.ytm_percent {
        Some(ytm) => format!("{} {ytm:.6}", row.bond),
        None => format!("{} error", row.bond),
    })?;

    let failures = rows.iter().filter(|row| !row.converged).count();
    if failures > 0 {
        print_warning(&format!("{failures} of {} bonds did not solve", rows.len()));
    }
    Ok(())
}
