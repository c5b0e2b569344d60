//! Presentation adapter.
//!
//! Maps an [`AnalysisResult`] to the exact records the renderers consume.
//! Each result shape has its own view-model; the mapping is total, so an
//! unrecognized response still has something to show.

mod badge;
mod grid;
mod url;

pub use badge::{progress, ScoreBadge};
pub use grid::{ChartRecord, DimensionRow, GridHeader, GridView, SubjectCard};
pub use url::{CategoryCard, UrlView};

use serde::Serialize;

use crate::model::AnalysisResult;

/// Message shown for a response of unknown shape.
pub const UNRECOGNIZED_MESSAGE: &str =
    "The analysis service returned a result in an unrecognized format";

/// Presentation of a response that matched no known shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnrecognizedView {
    pub message: String,
    pub keys: Vec<String>,
}

/// A fully shaped result, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultView {
    Grid(GridView),
    Url(UrlView),
    Unrecognized(UnrecognizedView),
}

impl ResultView {
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Self {
        match result {
            AnalysisResult::Grid(grid) => Self::Grid(GridView::from_analysis(grid)),
            AnalysisResult::Url(url) => Self::Url(UrlView::from_analysis(url)),
            AnalysisResult::Unrecognized { keys } => Self::Unrecognized(UnrecognizedView {
                message: UNRECOGNIZED_MESSAGE.to_string(),
                keys: keys.clone(),
            }),
        }
    }

    /// Single score summarizing the result: the grid mean or the URL
    /// analysis overall score.
    #[must_use]
    pub fn headline(&self) -> Option<&ScoreBadge> {
        match self {
            Self::Grid(grid) => Some(&grid.overall),
            Self::Url(url) => Some(&url.overall),
            Self::Unrecognized(_) => None,
        }
    }

    /// Title line for headers and report captions.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Grid(grid) => grid.header.title.clone(),
            Self::Url(UrlView { url: Some(url), .. }) => format!("URL Analysis for {url}"),
            Self::Url(_) => "URL Analysis".to_string(),
            Self::Unrecognized(_) => "Unrecognized Result".to_string(),
        }
    }
}
