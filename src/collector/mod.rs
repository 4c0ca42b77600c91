//! Merged pull request collection
//!
//! The search backend truncates any single query at
//! [`BACKEND_CAP`](crate::github::BACKEND_CAP) results, so the collector
//! queries month-sized date windows and recursively bisects any window whose
//! result count reaches the cap. Records are deduplicated by pull request
//! number across all windows of one run.

mod coordinator;
mod fetcher;
mod window;

pub use coordinator::{Collection, Collector, WindowWarning, MAX_SPLIT_DEPTH};
pub use fetcher::RangeFetcher;
pub use window::{month_windows, DateWindow};

use crate::github::QueryBackend;
use chrono::{DateTime, Utc};

/// One merged pull request as reported by the query backend.
///
/// Records are created by the fetcher and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPullRequest {
    /// Pull request number. Unique within a repository; used as the
    /// dedup key across windows.
    pub number: String,

    /// Free-text title. May contain the CSV delimiter.
    pub title: String,

    /// Merge timestamp as reported by the backend, kept verbatim for
    /// record-keeping only.
    pub merged_at: String,

    /// Canonical page URL.
    pub url: String,
}

/// Collects all pull requests merged in `[since, now)` for `repo`.
///
/// Convenience wrapper over [`Collector`] that uses the current time as the
/// end of the span.
pub async fn collect_merged_prs<B: QueryBackend>(
    backend: &B,
    since: DateTime<Utc>,
    repo: &str,
    search_term: &str,
) -> crate::Result<Collection> {
    Collector::new(backend, repo, search_term)
        .collect(since, Utc::now())
        .await
}
