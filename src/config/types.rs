//! Configuration types for ai-visibility.
//!
//! Provides structured configuration for the analysis service connection,
//! report output and the terminal dashboard.

use crate::client::HttpBackendConfig;
use crate::model::ResultSchema;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_PATH, DEFAULT_QUERY_FIELD, DEFAULT_TICK_RATE_MS,
    DEFAULT_TIMEOUT_SECS,
};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI flags and `AI_VISIBILITY_*` environment variables are applied on top
/// of file values with [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Analysis service connection
    pub api: ApiConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Apply command-line and environment overrides.
    ///
    /// A preset replaces the whole `api` section first; individual fields are
    /// applied after it, so `--preset dashboard --timeout 5` keeps the
    /// preset's endpoint with a shorter timeout.
    pub fn apply_overrides(&mut self, overrides: &ApiOverrides) {
        if let Some(preset) = overrides.preset {
            self.api = ApiConfig::from_preset(preset);
        }
        if let Some(base_url) = &overrides.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(path) = &overrides.path {
            self.api.path.clone_from(path);
        }
        if let Some(field) = &overrides.query_field {
            self.api.query_field.clone_from(field);
        }
        if let Some(schema) = overrides.schema {
            self.api.schema = schema;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if overrides.no_envelope {
            self.api.unwrap_envelope = false;
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    /// Set the endpoint path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.api.path = path.into();
        self
    }

    /// Set the request field carrying the query.
    pub fn query_field(mut self, field: impl Into<String>) -> Self {
        self.config.api.query_field = field.into();
        self
    }

    /// Set the expected response schema.
    pub const fn schema(mut self, schema: ResultSchema) -> Self {
        self.config.api.schema = schema;
        self
    }

    /// Set the request timeout in seconds.
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.api.timeout_secs = secs;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the TUI theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Analysis Service Configuration
// ============================================================================

/// Connection settings for the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the service (e.g. `http://localhost:5000`)
    pub base_url: String,
    /// Endpoint path the query is POSTed to
    pub path: String,
    /// Name of the JSON request field carrying the query
    pub query_field: String,
    /// Expected response shape
    pub schema: ResultSchema,
    /// Strip a `{data: ...}` envelope from responses
    pub unwrap_envelope: bool,
    /// Request timeout in seconds
    #[schemars(range(min = 1, max = 600))]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            query_field: DEFAULT_QUERY_FIELD.to_string(),
            schema: ResultSchema::Auto,
            unwrap_envelope: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Full endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Settings for [`crate::client::HttpBackend`].
    #[must_use]
    pub fn backend_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            endpoint: self.endpoint(),
            query_field: self.query_field.clone(),
            timeout: self.timeout(),
            unwrap_envelope: self.unwrap_envelope,
        }
    }
}

/// Overrides collected from CLI flags and environment variables.
#[derive(Debug, Clone, Default)]
pub struct ApiOverrides {
    pub preset: Option<super::ConfigPreset>,
    pub base_url: Option<String>,
    pub path: Option<String>,
    pub query_field: Option<String>,
    pub schema: Option<ResultSchema>,
    pub timeout_secs: Option<u64>,
    pub no_envelope: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Redraw interval in milliseconds
    #[schemars(range(min = 10, max = 5000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl TuiConfig {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
