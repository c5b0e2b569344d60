//! Interpreted analysis results.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::table::ScoreTable;
use super::url::UrlAnalysis;

/// Which response shape a caller expects from the analysis service.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResultSchema {
    /// Detect the shape from the fields present in the response
    #[default]
    Auto,
    /// Platform × methodology grid
    Grid,
    /// Flat named-category URL analysis
    #[value(alias = "url")]
    UrlAnalysis,
}

impl std::fmt::Display for ResultSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Grid => write!(f, "grid"),
            Self::UrlAnalysis => write!(f, "url-analysis"),
        }
    }
}

/// A platform × methodology analysis of one subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridAnalysis {
    /// Company name or URL the service reports it analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Free-text insights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    pub table: ScoreTable,
}

/// One immutable result snapshot, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisResult {
    Grid(GridAnalysis),
    Url(UrlAnalysis),
    /// The response matched neither known shape
    Unrecognized {
        /// Top-level keys found, for diagnostics
        keys: Vec<String>,
    },
}

impl AnalysisResult {
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized { .. })
    }

    /// Subject named by the result, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Grid(grid) => grid.subject.as_deref(),
            Self::Url(url) => url.url.as_deref(),
            Self::Unrecognized { .. } => None,
        }
    }
}
