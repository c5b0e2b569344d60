//! Configuration module for ai-visibility.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for the known service deployments
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ai_visibility::config::{AppConfig, ConfigPreset};
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Dashboard);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .base_url("https://visibility.example")
//!     .timeout_secs(10)
//!     .build();
//!
//! // Load from file
//! use ai_visibility::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.ai-visibility.yaml` file in your working directory or
//! `~/.config/ai-visibility/`:
//!
//! ```yaml
//! api:
//!   base_url: http://localhost:5000
//!   path: /api/analyze-url
//!   query_field: company_name
//!   schema: grid
//! tui:
//!   theme: light
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_BASE_URL, DEFAULT_PATH, DEFAULT_QUERY_FIELD, DEFAULT_TICK_RATE_MS,
    DEFAULT_TIMEOUT_SECS,
};
pub use types::{ApiConfig, ApiOverrides, AppConfig, AppConfigBuilder, OutputConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.ai-visibility.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
