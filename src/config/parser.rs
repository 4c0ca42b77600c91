use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Filename searched for in the working directory when no config flag is
/// given.
const DEFAULT_CONFIG_FILE: &str = "pr-ledger.toml";

/// Loads and validates a configuration file from the given path.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Resolves the effective configuration.
///
/// An explicit path must load; otherwise `pr-ledger.toml` in the working
/// directory is used when present, and built-in defaults when not.
pub fn resolve_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                load_config(fallback)
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
[backend]
program = "/usr/local/bin/gh"

[output]
csv-directory = "ledgers"

[capture]
format = "png"
output-directory = "shots"
wait-seconds = 10
full-page = false
browser = "google-chrome"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.backend.program, "/usr/local/bin/gh");
        assert_eq!(config.output.csv_directory, "ledgers");
        assert_eq!(config.capture.format, "png");
        assert_eq!(config.capture.wait_seconds, 10);
        assert!(!config.capture.full_page);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.backend.program, "gh");
        assert_eq!(config.output.csv_directory, "generated/csv");
        assert_eq!(config.capture.format, "pdf");
        assert_eq!(config.capture.wait_seconds, 5);
        assert!(config.capture.full_page);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/pr-ledger.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[capture]\nformat = \"gif\"\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_resolve_config_without_file_is_default() {
        // Running from a directory with no pr-ledger.toml; cargo test runs
        // from the crate root, which does not carry one.
        let config = resolve_config(None).unwrap();
        assert_eq!(config.backend.program, "gh");
    }
}
