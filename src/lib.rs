//! **Client and terminal dashboard for AI platform visibility analysis.**
//!
//! `ai-visibility` submits a company name or URL to an analysis service and
//! turns the loosely-shaped scores it returns into consistent, classified
//! views: a 5 platform × 4 methodology grid, or a flat URL analysis across
//! seven content categories.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: reference data (platforms, methodologies, URL categories)
//!   and the typed result snapshots, [`ScoreTable`] and [`UrlAnalysis`].
//! - **[`scoring`]**: the normalizer, which is total over any JSON input, plus
//!   aggregation, half-up rounding and band classification.
//! - **[`presentation`]**: view-models ([`ResultView`]) shared by the
//!   dashboard and every report format.
//! - **[`session`]** and **[`client`]**: the request orchestrator. Each search
//!   gets a request id and only the latest completion is applied.
//! - **[`reports`]**: JSON, summary, table and Markdown output.
//! - **[`tui`]**: the interactive ratatui dashboard.
//!
//! ## Getting Started
//!
//! ```
//! use ai_visibility::{interpret, ResultSchema, ResultView};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "company_name": "Acme",
//!     "chatgpt_scores": {"cidr": {"score": 90, "comment": "Strong"}}
//! });
//! let view = ResultView::from_result(&interpret(&raw, ResultSchema::Auto));
//! assert_eq!(view.headline().map(|badge| badge.display), Some(5));
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod presentation;
pub mod reports;
pub mod scoring;
pub mod session;
pub mod tui;

pub use client::{AnalysisBackend, FileBackend, HttpBackend, HttpBackendConfig};
pub use config::{AppConfig, ConfigPreset};
pub use error::{ErrorContext, Result, VisibilityError};
pub use model::{
    AnalysisResult, MethodologyId, PlatformId, ResultSchema, ScoreCell, ScoreTable, UrlAnalysis,
    UrlCategoryId,
};
pub use presentation::{GridView, ResultView, ScoreBadge, UrlView};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    aggregate_by_methodology, aggregate_by_platform, classify, interpret, normalize, Band, Rating,
};
pub use session::{Orchestrator, SearchState, Session};
