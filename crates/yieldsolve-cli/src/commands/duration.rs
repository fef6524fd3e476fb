//! Duration command implementation.

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tracing::warn;
use yieldsolve_bonds::instruments::Bond;
use yieldsolve_config::{DurationSettings, Validate};
use yieldsolve_risk::scenarios::DurationProfile;
use yieldsolve_risk::RiskResult;

use crate::cli::OutputFormat;
use crate::commands::{opt4, opt6, read_records};
use crate::error::CliError;
use crate::output::{display_option, print_output, print_warning};

/// Arguments for the duration command.
#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Bond file: issuer, maturity_year, offer_year, price, yield, coupon
    #[arg(short = 'i', long)]
    pub file: PathBuf,

    /// Yield move for the shocked durations (0.1 = 10%)
    #[arg(long)]
    pub shock: Option<f64>,
}

/// One line of the duration file. Years count whole annual periods;
/// the yield is a decimal and the coupon a currency amount per 100 face.
#[derive(Debug, Clone, Deserialize)]
struct DurationRecord {
    issuer: String,
    maturity_year: i32,
    offer_year: i32,
    price: f64,
    #[serde(rename = "yield")]
    yield_rate: f64,
    coupon: f64,
}

impl DurationRecord {
    fn bond(&self) -> Bond {
        Bond::new(
            self.offer_year,
            self.maturity_year,
            self.price,
            self.yield_rate,
            self.coupon,
        )
    }
}

#[derive(Debug, Serialize, Tabled)]
struct DurationRow {
    #[tabled(rename = "#")]
    record: usize,
    #[tabled(rename = "Issuer")]
    issuer: String,
    #[tabled(rename = "Macaulay", display_with = "opt4")]
    macaulay: Option<f64>,
    #[tabled(rename = "At 0%", display_with = "opt4")]
    at_zero: Option<f64>,
    #[tabled(rename = "Shocked Up", display_with = "opt4")]
    shocked_up: Option<f64>,
    #[tabled(rename = "Shocked Down", display_with = "opt4")]
    shocked_down: Option<f64>,
    #[tabled(rename = "Modified", display_with = "opt4")]
    modified: Option<f64>,
    #[tabled(rename = "% per bp", display_with = "opt6")]
    bp_change_percent: Option<f64>,
    #[tabled(rename = "DV01", display_with = "opt6")]
    dv01: Option<f64>,
    #[tabled(rename = "Error", display_with = "display_option")]
    error: Option<String>,
}

impl DurationRow {
    fn from_profile(
        record: usize,
        bond: DurationRecord,
        profile: &DurationProfile,
    ) -> RiskResult<Self> {
        let dv01 = profile.dv01(bond.price)?;
        Ok(Self {
            record,
            issuer: bond.issuer,
            macaulay: Some(profile.macaulay.as_f64()),
            at_zero: Some(profile.at_zero.as_f64()),
            shocked_up: Some(profile.shocked_up.as_f64()),
            shocked_down: Some(profile.shocked_down.as_f64()),
            modified: Some(profile.modified.as_f64()),
            bp_change_percent: Some(profile.bp_price_change * 100.0),
            dv01: Some(dv01.as_f64()),
            error: None,
        })
    }

    fn failed(record: usize, issuer: String, error: impl Display) -> Self {
        Self {
            record,
            issuer,
            macaulay: None,
            at_zero: None,
            shocked_up: None,
            shocked_down: None,
            modified: None,
            bp_change_percent: None,
            dv01: None,
            error: Some(error.to_string()),
        }
    }
}

/// Execute the duration command.
pub fn execute(args: DurationArgs, defaults: &DurationSettings, format: OutputFormat) -> Result<()> {
    let settings = DurationSettings {
        yield_shock: args.shock.unwrap_or(defaults.yield_shock),
        ..*defaults
    };
    settings.validate_or_error().map_err(CliError::from)?;

    let records = read_records::<DurationRecord>(&args.file)?;
    let bonds: Vec<Bond> = records
        .iter()
        .filter_map(|record| record.as_ref().ok())
        .map(DurationRecord::bond)
        .collect();
    let mut profiles = settings.calculator().profiles(&bonds).into_iter();

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let row = match record {
            Ok(record) => match profiles.next() {
                Some(Ok(profile)) => {
                    let issuer = record.issuer.clone();
                    DurationRow::from_profile(index + 1, record, &profile).unwrap_or_else(|e| {
                        warn!("duration: record {} ({issuer}): {e}", index + 1);
                        DurationRow::failed(index + 1, issuer, e)
                    })
                }
                Some(Err(e)) => {
                    warn!("duration: record {} ({}): {e}", index + 1, record.issuer);
                    DurationRow::failed(index + 1, record.issuer, e)
                }
                None => break,
            },
            Err(e) => {
                warn!("duration: record {}: {e}", index + 1);
                DurationRow::failed(index + 1, String::new(), e)
            }
        };
        rows.push(row);
    }

    print_output(&rows, format, |row| match (row.macaulay, row.modified) {
        (Some(macaulay), Some(modified)) => {
            format!("{} {macaulay:.4} {modified:.4}", row.issuer)
        }
        _ => format!("{} error", row.issuer),
    })?;

    let failures = rows.iter().filter(|row| row.error.is_some()).count();
    if failures > 0 {
        print_warning(&format!("{failures} of {} records failed", rows.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldsolve_risk::scenarios::duration_profile;

    fn record() -> DurationRecord {
        DurationRecord {
            issuer: "ACME".to_string(),
            maturity_year: 2030,
            offer_year: 2020,
            price: 100.0,
            yield_rate: 0.05,
            coupon: 5.0,
        }
    }

    #[test]
    fn test_record_to_bond() {
        let bond = record().bond();

        assert_eq!(bond.tenor().unwrap(), 10);
        assert_eq!(bond.coupon_per_period, 5.0);
    }

    #[test]
    fn test_row_from_profile() {
        let record = record();
        let profile = duration_profile(&record.bond(), 0.1).unwrap();
        let row = DurationRow::from_profile(1, record, &profile).unwrap();

        assert!((row.macaulay.unwrap() - 8.107_82).abs() < 1e-4);
        assert!((row.modified.unwrap() - 7.721_73).abs() < 1e-4);
        assert!(row.error.is_none());
    }
}
