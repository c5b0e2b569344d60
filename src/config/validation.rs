//! Configuration validation for ai-visibility.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{ApiConfig, AppConfig, OutputConfig, TuiConfig};
use crate::tui::theme::ThemeKind;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.output.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let scheme_ok = ["http://", "https://"]
            .iter()
            .any(|scheme| self.base_url.starts_with(scheme));
        let host = self
            .base_url
            .split_once("://")
            .map_or("", |(_, rest)| rest);
        if !scheme_ok || host.trim_matches('/').is_empty() {
            errors.push(ConfigError::new(
                "api.base_url",
                format!(
                    "Base URL must be an http:// or https:// address, got '{}'",
                    self.base_url
                ),
            ));
        }

        if !self.path.starts_with('/') {
            errors.push(ConfigError::new(
                "api.path",
                format!("Path must start with '/', got '{}'", self.path),
            ));
        }

        if self.query_field.trim().is_empty() {
            errors.push(ConfigError::new(
                "api.query_field",
                "Query field must not be empty",
            ));
        }

        if !(1..=600).contains(&self.timeout_secs) {
            errors.push(ConfigError::new(
                "api.timeout_secs",
                format!(
                    "Timeout must be between 1 and 600 seconds, got {}",
                    self.timeout_secs
                ),
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_ref().and_then(|file| file.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if ThemeKind::from_name(&self.theme).is_none() {
            let valid: Vec<&str> = ThemeKind::all().iter().map(|k| k.name()).collect();
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    valid.join(", ")
                ),
            ));
        }

        if !(10..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!(
                    "Tick rate must be between 10 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid(), "{:?}", config.validate());
    }

    #[test]
    fn test_api_validation() {
        let api = ApiConfig {
            base_url: "ftp://example.com".to_string(),
            path: "analyze".to_string(),
            query_field: " ".to_string(),
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        let fields: Vec<String> = api.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "api.base_url",
                "api.path",
                "api.query_field",
                "api.timeout_secs"
            ]
        );
    }

    #[test]
    fn test_base_url_needs_host() {
        let api = ApiConfig {
            base_url: "http://".to_string(),
            ..ApiConfig::default()
        };
        assert!(!api.is_valid());
    }

    #[test]
    fn test_tui_validation() {
        let tui = TuiConfig {
            theme: "neon".to_string(),
            tick_rate_ms: 1,
        };
        let errors = tui.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("high-contrast"));
    }

    #[test]
    fn test_output_file_parent_must_exist() {
        let output = OutputConfig {
            file: Some("/nonexistent-dir/report.json".into()),
            ..OutputConfig::default()
        };
        assert_eq!(output.validate()[0].field, "output.file");
    }
}
