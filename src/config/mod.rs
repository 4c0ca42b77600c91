//! Configuration module for PR-Ledger
//!
//! All settings have defaults; a TOML file only needs to name what it
//! changes. The file is optional: `--config` names one explicitly, and
//! `pr-ledger.toml` in the working directory is picked up when present.

mod parser;
mod types;
mod validation;

pub use parser::{load_config, resolve_config};
pub use types::{BackendConfig, CaptureConfig, Config, OutputConfig};
pub use validation::validate;
