//! Report type definitions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Structured JSON output
    Json,
    /// Brief summary output
    Summary,
    /// Compact table for terminal (colored)
    Table,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Provenance attached to every generated report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub tool: &'static str,
    pub version: &'static str,
    pub generated_at: DateTime<Utc>,
    /// The submitted query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Where the result came from (endpoint URL or file path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            query: None,
            source: None,
        }
    }
}

impl ReportMetadata {
    #[must_use]
    pub fn new(query: Option<String>, source: Option<String>) -> Self {
        Self {
            query,
            source,
            ..Self::default()
        }
    }

    /// One-line provenance footer.
    #[must_use]
    pub fn footer(&self) -> String {
        format!(
            "Generated by {} {} at {}",
            self.tool,
            self.version,
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
