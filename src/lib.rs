//! PR-Ledger: a merged pull request evidence collector
//!
//! This crate enumerates merged pull requests in a GitHub repository via the
//! `gh` CLI, works around the search API's 1,000-result cap with date-range
//! bisection, and persists the results to CSV ledgers that the `open` and
//! `capture` subcommands consume.

pub mod capture;
pub mod collector;
pub mod config;
pub mod github;
pub mod opener;
pub mod output;
pub mod roster;

use thiserror::Error;

/// Main error type for PR-Ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Backend(#[from] github::BackendError),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid repository '{0}': expected owner/repo")]
    InvalidRepository(String),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Roster error: {0}")]
    Roster(#[from] roster::RosterError),

    #[error("Capture error: {0}")]
    Capture(#[from] capture::CaptureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for PR-Ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use collector::{collect_merged_prs, Collection, Collector, MergedPullRequest};
pub use config::Config;
pub use github::{GhCli, QueryBackend, BACKEND_CAP};
