use serde::Deserialize;

/// Main configuration structure for PR-Ledger
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub capture: CaptureConfig,
}

/// Query backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Name or path of the GitHub CLI binary
    #[serde(default = "default_gh_program")]
    pub program: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            program: default_gh_program(),
        }
    }
}

/// Ledger output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where CSV ledgers are written
    #[serde(rename = "csv-directory", default = "default_csv_directory")]
    pub csv_directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_directory: default_csv_directory(),
        }
    }
}

/// Page capture configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Capture format: "pdf" or "png"
    #[serde(default = "default_capture_format")]
    pub format: String,

    /// Directory where captures are written
    #[serde(rename = "output-directory", default = "default_capture_directory")]
    pub output_directory: String,

    /// Seconds to let the page settle before rendering
    #[serde(rename = "wait-seconds", default = "default_wait_seconds")]
    pub wait_seconds: u64,

    /// Whether screenshots capture the full page height
    #[serde(rename = "full-page", default = "default_full_page")]
    pub full_page: bool,

    /// Name or path of the headless browser binary
    #[serde(default = "default_browser_program")]
    pub browser: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            format: default_capture_format(),
            output_directory: default_capture_directory(),
            wait_seconds: default_wait_seconds(),
            full_page: default_full_page(),
            browser: default_browser_program(),
        }
    }
}

fn default_gh_program() -> String {
    "gh".to_string()
}

fn default_csv_directory() -> String {
    "generated/csv".to_string()
}

fn default_capture_format() -> String {
    "pdf".to_string()
}

fn default_capture_directory() -> String {
    "pr_captures".to_string()
}

fn default_wait_seconds() -> u64 {
    5
}

fn default_full_page() -> bool {
    true
}

fn default_browser_program() -> String {
    "chromium".to_string()
}
