//! View-models for the platform × methodology grid.

use indexmap::IndexMap;
use serde::Serialize;

use super::badge::{progress, ScoreBadge};
use crate::model::{
    Dimension, GridAnalysis, MethodologyId, PlatformId, ScoreTable, METHODOLOGY_COUNT,
    PLATFORM_COUNT,
};
use crate::scoring::{
    aggregate_by_methodology, aggregate_by_platform, grid_mean, round_half_up, AggregateRow, Band,
    Trend,
};

/// Header card of a grid result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridHeader {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
}

/// One bar group of a chart: a subject with its rounded average and the raw
/// per-dimension scores as flat fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRecord {
    pub name: &'static str,
    pub full_name: &'static str,
    /// Rounded average
    pub score: i64,
    #[serde(flatten)]
    pub dimensions: IndexMap<&'static str, f64>,
}

/// One dimension line inside a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionRow {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub score: f64,
    pub display: i64,
    pub band: Band,
    pub trend: Trend,
    /// Progress-bar position in `0..=100`
    pub progress: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Card for one platform or methodology.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectCard {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: ScoreBadge,
    pub rows: Vec<DimensionRow>,
}

/// Everything the grid views render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
    pub header: GridHeader,
    pub platform_chart: Vec<ChartRecord>,
    pub methodology_chart: Vec<ChartRecord>,
    pub platform_cards: Vec<SubjectCard>,
    pub methodology_cards: Vec<SubjectCard>,
    /// Mean over all cells
    pub overall: ScoreBadge,
}

impl GridView {
    #[must_use]
    pub fn from_analysis(analysis: &GridAnalysis) -> Self {
        let table = &analysis.table;
        let platform_rows = aggregate_by_platform(table);
        let methodology_rows = aggregate_by_methodology(table);

        let title = match &analysis.subject {
            Some(subject) => format!("Analysis Results for {subject}"),
            None => "Analysis Results".to_string(),
        };

        Self {
            header: GridHeader {
                title,
                description: format!(
                    "Comprehensive AI visibility analysis across {PLATFORM_COUNT} platforms and {METHODOLOGY_COUNT} methodologies"
                ),
                insights: analysis.insights.clone(),
            },
            platform_chart: platform_rows.iter().map(chart_record).collect(),
            methodology_chart: methodology_rows.iter().map(chart_record).collect(),
            platform_cards: platform_rows
                .iter()
                .map(|row| {
                    subject_card(row, |methodology| {
                        comment(table, row.subject, methodology)
                    })
                })
                .collect(),
            methodology_cards: methodology_rows
                .iter()
                .map(|row| subject_card(row, |platform| comment(table, platform, row.subject)))
                .collect(),
            overall: ScoreBadge::new(grid_mean(table)),
        }
    }
}

fn comment(table: &ScoreTable, platform: PlatformId, methodology: MethodologyId) -> Option<String> {
    table.cell(platform, methodology).comment.clone()
}

fn chart_record<S: Dimension, D: Dimension>(row: &AggregateRow<S, D>) -> ChartRecord {
    ChartRecord {
        name: row.subject.label(),
        full_name: row.subject.description(),
        score: round_half_up(row.average),
        dimensions: row.scores.iter().map(|(d, s)| (d.key(), *s)).collect(),
    }
}

fn subject_card<S, D, F>(row: &AggregateRow<S, D>, comment_for: F) -> SubjectCard
where
    S: Dimension,
    D: Dimension,
    F: Fn(D) -> Option<String>,
{
    SubjectCard {
        key: row.subject.key(),
        name: row.subject.label(),
        description: row.subject.description(),
        badge: ScoreBadge::new(row.average),
        rows: row
            .scores
            .iter()
            .map(|(dimension, score)| {
                let badge = ScoreBadge::new(*score);
                DimensionRow {
                    key: dimension.key(),
                    label: dimension.label(),
                    description: dimension.description(),
                    score: *score,
                    display: badge.display,
                    band: badge.band,
                    trend: badge.trend,
                    progress: progress(*score),
                    comment: comment_for(*dimension),
                }
            })
            .collect(),
    }
}
