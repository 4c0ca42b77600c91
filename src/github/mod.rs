//! GitHub query backend
//!
//! This module defines the trait boundary for the merged-PR search backend
//! and its production implementation that shells out to the `gh` CLI.
//! Queries are read-only and assumed idempotent; the backend truncates any
//! single query at [`BACKEND_CAP`] results without signalling truncation.

mod cli;

pub use cli::GhCli;

use async_trait::async_trait;
use thiserror::Error;

/// Maximum number of results a single search query will return, regardless
/// of how many actually match.
pub const BACKEND_CAP: usize = 1000;

/// Errors raised by the query backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Backend command exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    #[error("Backend produced non-UTF-8 output")]
    InvalidOutput,
}

/// A read-only search backend for merged pull requests.
///
/// Implementations return raw response rows, one per line, each holding the
/// tab-separated fields `(number, title, mergedAt, url)`. Row parsing and
/// tolerance for malformed rows belong to the caller, not the backend.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Runs one search query against `repo`, returning at most `limit` rows.
    async fn search_merged(
        &self,
        repo: &str,
        query: &str,
        limit: usize,
    ) -> std::result::Result<String, BackendError>;
}
