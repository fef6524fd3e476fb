//! # yieldsolve Configuration
//!
//! Settings for the yieldsolve solvers, loaded from TOML or JSON.
//!
//! - **Solver**: tolerance and iteration cap, convertible into
//!   [`SolverConfig`](yieldsolve_math::solvers::SolverConfig)
//! - **IRR**: method, bracket, Newton guess and scan step
//! - **YTM**: Newton seed, face value, coupon frequency and the
//!   finite-difference scheme
//! - **Duration**: yield shock and the parallel batch threshold
//!
//! Every section validates through the [`Validate`] trait; loading a file
//! fails on the first out-of-range value.
//!
//! # Example
//!
//! ```rust
//! use yieldsolve_config::{IrrMethod, Settings, Validate};
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [irr]
//!     method = "bisection"
//!     high = 0.015
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.irr.method, IrrMethod::Bisection);
//! assert!(settings.is_valid());
//!
//! let calc = settings.irr.calculator();
//! assert_eq!(calc.config().tolerance, 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use settings::{
    DurationSettings, IrrMethod, IrrSettings, Settings, SolverSettings, YtmSettings,
    MAX_ITERATIONS, MAX_TOLERANCE,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::settings::{
        DurationSettings, IrrMethod, IrrSettings, Settings, SolverSettings, YtmSettings,
    };
}
