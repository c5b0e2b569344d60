//! Default configurations and presets for ai-visibility.
//!
//! Provides named presets for the known service deployments and default values.

use super::types::{ApiConfig, AppConfig};
use crate::model::ResultSchema;

/// Default analysis service address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default endpoint path.
pub const DEFAULT_PATH: &str = "/analyze";

/// Default request field carrying the query.
pub const DEFAULT_QUERY_FIELD: &str = "url";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default TUI redraw interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named presets for the known analysis service deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Company dashboard: `/api/analyze-url` with `company_name`, enveloped grid
    Dashboard,
    /// URL input form: `/analyze` with `url`, bare grid
    UrlInput,
    /// Flat URL analysis: `/analyze` with `url`, category shape
    UrlAnalysis,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::UrlInput => "url-input",
            Self::UrlAnalysis => "url-analysis",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dashboard" | "company" => Some(Self::Dashboard),
            "url-input" | "url" => Some(Self::UrlInput),
            "url-analysis" | "categories" => Some(Self::UrlAnalysis),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Dashboard => "Company-name search against /api/analyze-url with a data envelope",
            Self::UrlInput => "URL search against /analyze returning the platform grid",
            Self::UrlAnalysis => "URL search against /analyze returning category scores",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dashboard, Self::UrlInput, Self::UrlAnalysis]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl ApiConfig {
    /// Service settings for a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Dashboard => Self {
                path: "/api/analyze-url".to_string(),
                query_field: "company_name".to_string(),
                schema: ResultSchema::Grid,
                unwrap_envelope: true,
                ..Self::default()
            },
            ConfigPreset::UrlInput => Self {
                schema: ResultSchema::Grid,
                unwrap_envelope: false,
                ..Self::default()
            },
            ConfigPreset::UrlAnalysis => Self {
                schema: ResultSchema::UrlAnalysis,
                unwrap_envelope: false,
                ..Self::default()
            },
        }
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        Self {
            api: ApiConfig::from_preset(preset),
            ..Self::default()
        }
    }
}
