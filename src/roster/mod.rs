//! Reading PR URLs back out of previously written ledgers
//!
//! The reader does not assume the exact column layout our own writer
//! produces: any tabular file with a URL column, or with owner, repo, and
//! PR-number columns from which a URL can be rebuilt, yields a usable
//! roster. Both comma- and tab-delimited files are accepted.

mod format;

pub use format::{detect_delimiter, RosterFormat};

use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a roster file
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Roster must have a header row and at least one data row")]
    Empty,

    #[error("Roster needs a URL column, or owner, repo, and PR number columns")]
    MissingColumns,
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Reads PR URLs from a CSV or TSV ledger.
///
/// Rows missing the detected columns are skipped, matching the writer's
/// tolerance for partial rows.
pub fn read_pr_urls(path: &Path) -> RosterResult<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let delimiter = detect_delimiter(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(content.as_bytes());

    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    if records.len() < 2 {
        return Err(RosterError::Empty);
    }

    let format = RosterFormat::detect(&records[0])?;

    let mut urls = Vec::new();
    for record in &records[1..] {
        match format.url_for(record) {
            Some(url) => urls.push(url),
            None => tracing::debug!("Skipping roster row with missing fields"),
        }
    }

    Ok(urls)
}
