//! yieldsolve CLI - rate and duration solvers from the command line.
//!
//! # Usage
//!
//! ```bash
//! # IRR of a two-root schedule by Newton from 0
//! yieldsolve irr --initial 9702 --flows=-19700,10000
//!
//! # Locate every sign change of the NPV
//! yieldsolve scan --initial 9702 --flows=-19700,10000 --low 0 --high 0.03 --step 0.001
//!
//! # Yield to maturity for each bond in a file
//! yieldsolve ytm --file bond_data.csv
//!
//! # Duration profiles
//! yieldsolve duration --file duration.csv --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yieldsolve_config::Settings;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yieldsolve=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yieldsolve=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match cli.config {
        Some(ref path) => {
            let settings = Settings::from_path(path).map_err(error::CliError::from)?;
            tracing::debug!("using settings from {}", path.display());
            settings
        }
        None => Settings::default(),
    };

    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Irr(args) => commands::irr::execute(args, &settings.irr, format)?,
        Commands::Scan(args) => commands::scan::execute(args, &settings.irr, format)?,
        Commands::Ytm(args) => commands::ytm::execute(args, &settings.ytm, format)?,
        Commands::Duration(args) => commands::duration::execute(args, &settings.duration, format)?,
    }

    Ok(())
}
