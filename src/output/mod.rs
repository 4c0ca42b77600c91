//! Ledger output handling
//!
//! Writes collected pull requests to CSV files with deterministic names.

mod csv_output;

pub use csv_output::{derive_csv_path, write_csv, CSV_HEADERS};

use thiserror::Error;

/// Errors that can occur while writing ledgers
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
