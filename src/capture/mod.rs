//! Page capture via a headless browser
//!
//! Renders PR pages to PDF or PNG by shelling out to a Chromium-family
//! browser in headless mode. The browser binary is configurable; anything
//! accepting `--headless` with `--print-to-pdf`/`--screenshot` works.

use std::path::PathBuf;
use thiserror::Error;
use tokio::process::Command;
use url::Url;

/// Errors raised while capturing a page
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to launch browser '{program}': {message}")]
    BrowserLaunch { program: String, message: String },

    #[error("Browser exited with status {status}: {stderr}")]
    BrowserFailed { status: i32, stderr: String },

    #[error("Not a recognizable pull request URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capture output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFormat {
    Pdf,
    Png,
}

impl CaptureFormat {
    /// Parses a format name; `None` for anything but "pdf" or "png".
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pdf" => Some(Self::Pdf),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Png => "png",
        }
    }
}

/// Options for capturing PR pages
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub format: CaptureFormat,
    pub output_dir: PathBuf,
    pub wait_seconds: u64,
    pub full_page: bool,
    pub browser: String,
}

/// Captures one PR page, returning the path of the written file.
///
/// The output file is named `<repo>_pr_<number>.<ext>` inside
/// `options.output_dir`, which is created if missing.
pub async fn capture_pr_page(
    url: &str,
    options: &CaptureOptions,
) -> Result<PathBuf, CaptureError> {
    let (repo, number) = parse_pr_url(url)?;

    std::fs::create_dir_all(&options.output_dir)?;
    let output_path = options.output_dir.join(format!(
        "{}_pr_{}.{}",
        repo,
        number,
        options.format.extension()
    ));

    let mut command = Command::new(&options.browser);
    command
        .arg("--headless=new")
        .arg("--disable-gpu")
        .arg("--hide-scrollbars")
        // Lets scripts and lazy-loaded content settle before rendering.
        .arg(format!(
            "--virtual-time-budget={}",
            options.wait_seconds * 1000
        ));

    match options.format {
        CaptureFormat::Pdf => {
            command
                .arg(format!("--print-to-pdf={}", output_path.display()))
                .arg("--no-pdf-header-footer");
        }
        CaptureFormat::Png => {
            command.arg(format!("--screenshot={}", output_path.display()));
            if options.full_page {
                command.arg("--window-size=1280,10000");
            } else {
                command.arg("--window-size=1280,960");
            }
        }
    }

    command.arg(url);

    tracing::debug!("Capturing {} to {}", url, output_path.display());
    let output = command.output().await.map_err(|e| CaptureError::BrowserLaunch {
        program: options.browser.clone(),
        message: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(CaptureError::BrowserFailed {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output_path)
}

/// Extracts `(repo, number)` from a PR URL like
/// `https://github.com/owner/repo/pull/123`.
fn parse_pr_url(url: &str) -> Result<(String, String), CaptureError> {
    let parsed = Url::parse(url).map_err(|_| CaptureError::InvalidUrl(url.to_string()))?;
    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [_owner, repo, "pull", number, ..] if !number.is_empty() => {
            Ok((repo.to_string(), number.to_string()))
        }
        _ => Err(CaptureError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pr_url() {
        let (repo, number) =
            parse_pr_url("https://github.com/acme/widgets/pull/123").unwrap();
        assert_eq!(repo, "widgets");
        assert_eq!(number, "123");
    }

    #[test]
    fn test_parse_pr_url_rejects_non_pr_paths() {
        assert!(parse_pr_url("https://github.com/acme/widgets").is_err());
        assert!(parse_pr_url("https://github.com/acme/widgets/issues/5").is_err());
        assert!(parse_pr_url("not a url at all").is_err());
    }

    #[test]
    fn test_capture_format_parse() {
        assert_eq!(CaptureFormat::parse("pdf"), Some(CaptureFormat::Pdf));
        assert_eq!(CaptureFormat::parse("png"), Some(CaptureFormat::Png));
        assert_eq!(CaptureFormat::parse("gif"), None);
    }

    #[test]
    fn test_capture_format_extension() {
        assert_eq!(CaptureFormat::Pdf.extension(), "pdf");
        assert_eq!(CaptureFormat::Png.extension(), "png");
    }
}
