pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::TerminalAlerter;
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    batch::{run_batch, BatchSummary},
    estimator::estimate,
    form::FormState,
};
pub use domain::model::{BacInput, BacResult, DisplayColor, Severity, SeverityPalette, Sex};
pub use utils::error::{AlcometerError, Result};
