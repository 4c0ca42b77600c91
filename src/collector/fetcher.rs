//! Bounded single-window fetches
//!
//! Issues one capped query to the backend for a date window and parses the
//! tab-separated response rows into typed records. Rows that do not split
//! into exactly four fields are dropped rather than failing the fetch; the
//! backend occasionally emits partial rows and losing one is preferable to
//! losing the window.

use crate::collector::window::DateWindow;
use crate::collector::MergedPullRequest;
use crate::github::{BackendError, QueryBackend, BACKEND_CAP};

/// Fetches merged pull requests for single date windows.
///
/// Repository and search term are fixed for the lifetime of the fetcher;
/// only the window varies between calls.
pub struct RangeFetcher<'a, B: QueryBackend> {
    backend: &'a B,
    repo: &'a str,
    search_term: &'a str,
}

impl<'a, B: QueryBackend> RangeFetcher<'a, B> {
    pub fn new(backend: &'a B, repo: &'a str, search_term: &'a str) -> Self {
        Self {
            backend,
            repo,
            search_term,
        }
    }

    pub fn repo(&self) -> &str {
        self.repo
    }

    /// Fetches up to [`BACKEND_CAP`] pull requests merged within `window`.
    ///
    /// The returned order is backend-defined, not chronological. A result
    /// count equal to the cap signals possible truncation; callers are
    /// expected to narrow the window and retry.
    pub async fn fetch(
        &self,
        window: &DateWindow,
    ) -> Result<Vec<MergedPullRequest>, BackendError> {
        let mut query = window.as_merged_filter();
        if !self.search_term.is_empty() {
            query.push(' ');
            query.push_str(self.search_term);
        }

        let raw = self
            .backend
            .search_merged(self.repo, &query, BACKEND_CAP)
            .await?;

        Ok(parse_rows(&raw))
    }
}

/// Parses tab-separated response rows, skipping blank and malformed lines.
fn parse_rows(raw: &str) -> Vec<MergedPullRequest> {
    let mut records = Vec::new();

    for line in raw.lines() {
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 4 {
            tracing::debug!("Skipping malformed response row: {}", line);
            continue;
        }

        records.push(MergedPullRequest {
            number: fields[0].to_string(),
            title: fields[1].to_string(),
            merged_at: fields[2].to_string(),
            url: fields[3].to_string(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Backend that records the query it was given and returns a fixed body.
    struct RecordingBackend {
        last_query: Mutex<Option<(String, String, usize)>>,
        body: String,
    }

    #[async_trait]
    impl QueryBackend for RecordingBackend {
        async fn search_merged(
            &self,
            repo: &str,
            query: &str,
            limit: usize,
        ) -> Result<String, BackendError> {
            *self.last_query.lock().unwrap() =
                Some((repo.to_string(), query.to_string(), limit));
            Ok(self.body.clone())
        }
    }

    fn window() -> DateWindow {
        DateWindow::new(
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_parse_rows() {
        let raw = "1\tFix the frobnicator\t2023-01-02T10:00:00Z\thttps://github.com/acme/widgets/pull/1\n\
                   2\tAdd docs\t2023-01-03T11:00:00Z\thttps://github.com/acme/widgets/pull/2";

        let records = parse_rows(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number, "1");
        assert_eq!(records[0].title, "Fix the frobnicator");
        assert_eq!(records[1].url, "https://github.com/acme/widgets/pull/2");
    }

    #[test]
    fn test_parse_rows_skips_malformed_lines() {
        let raw = "1\tonly three fields\t2023-01-02T10:00:00Z\n\
                   \n\
                   2\tok\t2023-01-03T11:00:00Z\thttps://github.com/acme/widgets/pull/2";

        let records = parse_rows(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, "2");
    }

    #[test]
    fn test_parse_rows_empty_response() {
        assert!(parse_rows("").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_builds_query_with_search_term() {
        let backend = RecordingBackend {
            last_query: Mutex::new(None),
            body: String::new(),
        };

        let fetcher = RangeFetcher::new(&backend, "acme/widgets", "frobnicator");
        fetcher.fetch(&window()).await.unwrap();

        let (repo, query, limit) = backend.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(repo, "acme/widgets");
        assert_eq!(query, "merged:2023-01-01..2023-02-01 frobnicator");
        assert_eq!(limit, BACKEND_CAP);
    }

    #[tokio::test]
    async fn test_fetch_omits_empty_search_term() {
        let backend = RecordingBackend {
            last_query: Mutex::new(None),
            body: String::new(),
        };

        let fetcher = RangeFetcher::new(&backend, "acme/widgets", "");
        fetcher.fetch(&window()).await.unwrap();

        let (_, query, _) = backend.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(query, "merged:2023-01-01..2023-02-01");
    }
}
