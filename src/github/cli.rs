//! `gh` CLI backend implementation
//!
//! Each query is one `gh pr list` invocation with a `--jq` projection that
//! flattens the JSON response into tab-separated rows.

use super::{BackendError, QueryBackend};
use async_trait::async_trait;
use tokio::process::Command;

/// Query backend backed by the GitHub CLI.
pub struct GhCli {
    program: String,
}

impl GhCli {
    /// Creates a backend that invokes the given `gh` binary.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

#[async_trait]
impl QueryBackend for GhCli {
    async fn search_merged(
        &self,
        repo: &str,
        query: &str,
        limit: usize,
    ) -> Result<String, BackendError> {
        tracing::debug!("Running {} pr list --search '{}'", self.program, query);

        let output = Command::new(&self.program)
            .args([
                "pr",
                "list",
                "--repo",
                repo,
                "--search",
                query,
                "--json",
                "number,title,mergedAt,url",
                "--jq",
                ".[] | [.number, .title, .mergedAt, .url] | @tsv",
                "--limit",
            ])
            .arg(limit.to_string())
            .output()
            .await
            .map_err(|e| {
                BackendError::Unavailable(format!("failed to run '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            return Err(BackendError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .map_err(|_| BackendError::InvalidOutput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_is_gh() {
        let backend = GhCli::default();
        assert_eq!(backend.program, "gh");
    }

    #[tokio::test]
    async fn test_missing_binary_is_unavailable() {
        let backend = GhCli::new("pr-ledger-test-no-such-binary");
        let result = backend
            .search_merged("acme/widgets", "merged:2023-01-01..2023-02-01", 1000)
            .await;

        assert!(matches!(result, Err(BackendError::Unavailable(_))));
    }
}
