//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY/MM/DD.")]
    InvalidDate(String),

    /// Input file could not be opened or parsed.
    #[error("Cannot read {}: {message}", path.display())]
    Input {
        /// File being read.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] yieldsolve_config::ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
