//! Collection coordinator - window resolution and deduplication
//!
//! Drives the fetcher over the requested span:
//! - partitions the span into month-sized windows,
//! - resolves each window with an explicit work stack, bisecting any window
//!   whose result count reaches the backend cap,
//! - admits records into the result exactly once, keyed by PR number.
//!
//! Reaching the cap is a heuristic, not proof of truncation: a window can
//! legitimately hold exactly the cap. The extra bisection that triggers is
//! harmless because dedup absorbs the overlap.
//!
//! Failures local to one window (backend outage, unsplittable saturated
//! window) are recorded as warnings and the run continues; only invalid
//! inputs abort the whole collection.

use crate::collector::fetcher::RangeFetcher;
use crate::collector::window::{month_windows, DateWindow};
use crate::collector::MergedPullRequest;
use crate::github::{QueryBackend, BACKEND_CAP};
use crate::LedgerError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Maximum bisection depth for a single monthly window.
pub const MAX_SPLIT_DEPTH: u32 = 10;

/// A non-fatal problem encountered while resolving one window.
#[derive(Debug, Clone)]
pub struct WindowWarning {
    pub window: DateWindow,
    pub message: String,
}

/// The outcome of one collection run.
#[derive(Debug, Default)]
pub struct Collection {
    /// Admitted records, deduplicated by PR number. Order follows the
    /// order windows were resolved in, not merge time.
    pub records: Vec<MergedPullRequest>,

    /// Non-fatal problems accumulated during the run. A non-empty list
    /// means the result is best-effort.
    pub warnings: Vec<WindowWarning>,
}

/// Drives a full collection run over a date span.
pub struct Collector<'a, B: QueryBackend> {
    fetcher: RangeFetcher<'a, B>,
    seen: HashSet<String>,
    collection: Collection,
}

impl<'a, B: QueryBackend> Collector<'a, B> {
    pub fn new(backend: &'a B, repo: &'a str, search_term: &'a str) -> Self {
        Self {
            fetcher: RangeFetcher::new(backend, repo, search_term),
            seen: HashSet::new(),
            collection: Collection::default(),
        }
    }

    /// Collects all pull requests merged in `[since, until)`, deduplicated.
    ///
    /// Fails fast on invalid inputs; everything after that is best-effort,
    /// with per-window problems reported through [`Collection::warnings`].
    pub async fn collect(
        mut self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> crate::Result<Collection> {
        let repo = self.fetcher.repo();
        if repo.trim().is_empty() || !repo.contains('/') {
            return Err(LedgerError::InvalidRepository(repo.to_string()));
        }
        if since > until {
            return Err(LedgerError::InvalidDateRange(format!(
                "start date {} is after {}",
                since.format("%Y-%m-%d"),
                until.format("%Y-%m-%d")
            )));
        }

        let windows = month_windows(since, until);
        tracing::info!(
            "Collecting merged PRs for {} across {} monthly windows",
            repo,
            windows.len()
        );

        for (i, window) in windows.iter().enumerate() {
            tracing::info!("Fetching window {}/{}: {}", i + 1, windows.len(), window);
            self.resolve(*window).await;
        }

        tracing::info!(
            "Collected {} unique pull requests ({} warnings)",
            self.collection.records.len(),
            self.collection.warnings.len()
        );

        Ok(self.collection)
    }

    /// Resolves one monthly window with an explicit work stack.
    ///
    /// A window whose result count reaches the backend cap may be
    /// truncated, so it is bisected and both halves are retried at
    /// depth + 1. Windows narrower than one day, or already at the depth
    /// bound, cannot be narrowed further: whatever the backend returned is
    /// admitted along with a warning that the window may be incomplete.
    async fn resolve(&mut self, window: DateWindow) {
        let mut pending = vec![(window, 0u32)];

        while let Some((current, depth)) = pending.pop() {
            let records = match self.fetcher.fetch(&current).await {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Skipping window {}: {}", current, e);
                    self.warn(current, format!("backend error: {}", e));
                    continue;
                }
            };

            if records.len() >= BACKEND_CAP {
                if current.is_sub_day() {
                    tracing::warn!(
                        "Window {} hit the {} result cap but is under one day, cannot split further",
                        current,
                        BACKEND_CAP
                    );
                    self.warn(
                        current,
                        format!(
                            "hit the {} result cap on a sub-day window; results may be incomplete",
                            BACKEND_CAP
                        ),
                    );
                } else if depth >= MAX_SPLIT_DEPTH {
                    tracing::warn!(
                        "Window {} still saturated at maximum split depth {}",
                        current,
                        MAX_SPLIT_DEPTH
                    );
                    self.warn(
                        current,
                        format!(
                            "still saturated at maximum split depth {}; results may be incomplete",
                            MAX_SPLIT_DEPTH
                        ),
                    );
                } else {
                    tracing::debug!("Window {} saturated, splitting", current);
                    let (first, second) = current.bisect();
                    // Second half pushed first so the stack resolves the
                    // halves in chronological order.
                    pending.push((second, depth + 1));
                    pending.push((first, depth + 1));
                    continue;
                }
            }

            self.admit(records);
        }
    }

    /// Admits records whose PR number has not been seen in this run.
    fn admit(&mut self, records: Vec<MergedPullRequest>) {
        for record in records {
            if self.seen.insert(record.number.clone()) {
                self.collection.records.push(record);
            }
        }
    }

    fn warn(&mut self, window: DateWindow, message: String) {
        self.collection.warnings.push(WindowWarning { window, message });
    }
}
