//! CSV ledger writer
//!
//! One header row, then one row per pull request. Quoting is handled by the
//! `csv` crate, so titles containing commas, quotes, or newlines survive a
//! round trip through the roster reader.

use crate::collector::MergedPullRequest;
use crate::output::OutputResult;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Header row shared with the roster reader.
pub const CSV_HEADERS: [&str; 4] = ["PR Number", "Title", "Merged At", "URL"];

/// Writes collected records to a CSV ledger, creating parent directories as
/// needed.
pub fn write_csv(records: &[MergedPullRequest], path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADERS)?;

    for record in records {
        writer.write_record([
            &record.number,
            &record.title,
            &record.merged_at,
            &record.url,
        ])?;
    }

    writer.flush()?;
    tracing::debug!("Wrote {} records to {}", records.len(), path.display());

    Ok(())
}

/// Derives the ledger filename from repository, start date, and search term:
/// `merged_prs_<owner>_<repo>_<YYYYMMDD>[_<term>].csv`.
pub fn derive_csv_path(
    directory: &Path,
    repo: &str,
    since: DateTime<Utc>,
    search_term: &str,
) -> PathBuf {
    let mut name = format!(
        "merged_prs_{}_{}",
        repo.replace('/', "_"),
        since.format("%Y%m%d")
    );

    if !search_term.is_empty() {
        name.push('_');
        name.push_str(&search_term.replace(' ', "_"));
    }

    name.push_str(".csv");
    directory.join(name)
}
