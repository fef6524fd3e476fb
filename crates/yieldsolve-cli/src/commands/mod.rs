//! CLI command implementations.

pub mod duration;
pub mod irr;
pub mod scan;
pub mod ytm;

pub use duration::DurationArgs;
pub use irr::IrrArgs;
pub use scan::ScanArgs;
pub use ytm::YtmArgs;

use std::path::Path;

use clap::Args;
use serde::de::DeserializeOwned;
use yieldsolve_config::SolverSettings;
use yieldsolve_core::types::{CashFlowSchedule, Date, Frequency};
use yieldsolve_core::CoreResult;

use crate::error::{CliError, CliResult};

/// Date layout of the bond files.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Cash flows given on the command line.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Amount at period 0 (negative for an outlay)
    #[arg(long, allow_negative_numbers = true)]
    pub initial: f64,

    /// Amounts at periods 1, 2, ... separated by commas
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub flows: Vec<f64>,

    /// Compounding periods per year: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long)]
    pub frequency: Option<u32>,
}

impl ScheduleArgs {
    /// Builds the schedule at the given frequency.
    pub fn schedule(&self, frequency: Frequency) -> CoreResult<CashFlowSchedule> {
        CashFlowSchedule::from_initial_and_flows(self.initial, &self.flows, frequency)
    }
}

/// Solver stopping-rule overrides.
#[derive(Args, Debug)]
pub struct SolverArgs {
    /// Convergence tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum solver iterations
    #[arg(long)]
    pub max_iterations: Option<u32>,
}

impl SolverArgs {
    /// Applies the overrides on top of `base`.
    pub fn apply(&self, base: SolverSettings) -> SolverSettings {
        SolverSettings {
            tolerance: self.tolerance.unwrap_or(base.tolerance),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
        }
    }
}

/// Parses a date string in YYYY/MM/DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse_with_format(s.trim(), DATE_FORMAT).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Reads every record of a CSV file with a header row.
///
/// A record that fails to parse is kept as an error message in its slot.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> CliResult<Vec<Result<T, String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CliError::Input {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let records: Vec<_> = reader
        .deserialize()
        .map(|record: Result<T, csv::Error>| record.map_err(|e| e.to_string()))
        .collect();
    tracing::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Formats a number to six decimals for a table cell.
pub fn fixed6(value: &f64) -> String {
    format!("{value:.6}")
}

/// Six decimals, or `-` when missing.
pub fn opt6(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.6}"))
}

/// Four decimals, or `-` when missing.
pub fn opt4(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2029/01/15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2029, 1, 15));
        assert!(matches!(parse_date("2029-01-15"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_solver_overrides() {
        let args = SolverArgs {
            tolerance: Some(1e-9),
            max_iterations: None,
        };
        let settings = args.apply(SolverSettings::default());

        assert_eq!(settings.tolerance, 1e-9);
        assert_eq!(settings.max_iterations, 100);
    }

    #[test]
    fn test_read_records_keeps_bad_rows() {
        #[derive(serde::Deserialize)]
        struct Row {
            name: String,
            value: f64,
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name, value\na, 1.5\nb, oops\n").unwrap();

        let records = read_records::<Row>(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        let first = records[0].as_ref().unwrap();
        assert_eq!(first.name, "a");
        assert_eq!(first.value, 1.5);
        assert!(records[1].is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = read_records::<(String,)>(Path::new("/nonexistent/bonds.csv"));
        assert!(matches!(result, Err(CliError::Input { .. })));
    }

    #[test]
    fn test_cell_formats() {
        assert_eq!(fixed6(&(1.0 / 3.0)), "0.333333");
        assert_eq!(opt6(&Some(0.5)), "0.500000");
        assert_eq!(opt4(&None), "-");
    }
}
