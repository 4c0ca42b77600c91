use crate::config::types::{BackendConfig, CaptureConfig, Config, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_backend_config(&config.backend)?;
    validate_output_config(&config.output)?;
    validate_capture_config(&config.capture)?;
    Ok(())
}

fn validate_backend_config(config: &BackendConfig) -> Result<(), ConfigError> {
    if config.program.trim().is_empty() {
        return Err(ConfigError::Validation(
            "backend program cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "csv-directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_capture_config(config: &CaptureConfig) -> Result<(), ConfigError> {
    if config.format != "pdf" && config.format != "png" {
        return Err(ConfigError::Validation(format!(
            "capture format must be 'pdf' or 'png', got '{}'",
            config.format
        )));
    }

    if config.output_directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "capture output-directory cannot be empty".to_string(),
        ));
    }

    if config.wait_seconds > 120 {
        return Err(ConfigError::Validation(format!(
            "wait-seconds must be at most 120, got {}",
            config.wait_seconds
        )));
    }

    if config.browser.trim().is_empty() {
        return Err(ConfigError::Validation(
            "capture browser cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_unknown_capture_format() {
        let mut config = Config::default();
        config.capture.format = "gif".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_empty_backend_program() {
        let mut config = Config::default();
        config.backend.program = "  ".to_string();

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_excessive_wait() {
        let mut config = Config::default();
        config.capture.wait_seconds = 600;

        assert!(validate(&config).is_err());
    }
}
