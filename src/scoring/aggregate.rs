//! Derived summary statistics over a [`ScoreTable`].
//!
//! Averages always divide by the full enumerated dimension count. A platform
//! with two of four methodologies scored averages `(a + b + 0 + 0) / 4`, so
//! partial data lowers the average instead of being re-weighted.

use serde::Serialize;

use crate::model::{
    Dimension, MethodologyId, PlatformId, ScoreTable, UrlAnalysis, METHODOLOGY_COUNT,
    PLATFORM_COUNT,
};

/// Average of one subject across the other dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow<S, D> {
    pub subject: S,
    /// Unrounded mean over the full dimension count
    pub average: f64,
    /// Per-dimension scores, in reference order
    pub scores: Vec<(D, f64)>,
}

/// A platform's average over its methodologies.
pub type PlatformRow = AggregateRow<PlatformId, MethodologyId>;

/// A methodology's average over all platforms.
pub type MethodologyRow = AggregateRow<MethodologyId, PlatformId>;

impl<S: Dimension, D: Dimension> AggregateRow<S, D> {
    /// Display name of the subject.
    #[must_use]
    pub fn subject_name(&self) -> &'static str {
        self.subject.label()
    }

    /// Average rounded for display.
    #[must_use]
    pub fn display_average(&self) -> i64 {
        round_half_up(self.average)
    }

    /// Score for one dimension.
    #[must_use]
    pub fn score_for(&self, dimension: D) -> Option<f64>
    where
        D: PartialEq,
    {
        self.scores
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, score)| *score)
    }
}

/// One row per platform, in reference order.
#[must_use]
pub fn aggregate_by_platform(table: &ScoreTable) -> Vec<PlatformRow> {
    PlatformId::ALL
        .into_iter()
        .map(|platform| {
            let scores = table.platform_scores(platform);
            AggregateRow {
                subject: platform,
                average: mean(&scores),
                scores: MethodologyId::ALL.into_iter().zip(scores).collect(),
            }
        })
        .collect()
}

/// One row per methodology, in reference order.
#[must_use]
pub fn aggregate_by_methodology(table: &ScoreTable) -> Vec<MethodologyRow> {
    MethodologyId::ALL
        .into_iter()
        .map(|methodology| {
            let scores = table.methodology_scores(methodology);
            AggregateRow {
                subject: methodology,
                average: mean(&scores),
                scores: PlatformId::ALL.into_iter().zip(scores).collect(),
            }
        })
        .collect()
}

/// Headline score of a URL analysis.
///
/// Read directly from the payload's `overall_score.value`; it is not
/// recomputed from the categories.
#[must_use]
pub const fn overall_score(analysis: &UrlAnalysis) -> f64 {
    analysis.overall.value
}

/// Mean of all cells in the table.
///
/// Equal to the mean of the platform averages, since every row has the same
/// denominator.
#[must_use]
pub fn grid_mean(table: &ScoreTable) -> f64 {
    let total: f64 = table.iter().map(|(_, _, cell)| cell.score).sum();
    total / (PLATFORM_COUNT * METHODOLOGY_COUNT) as f64
}

/// Round to the nearest integer with halves going up (`22.5 -> 23`,
/// `-0.5 -> 0`).
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn mean<const N: usize>(scores: &[f64; N]) -> f64 {
    scores.iter().sum::<f64>() / N as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_average_uses_full_denominator() {
        let table = ScoreTable::new()
            .with_score(PlatformId::Claude, MethodologyId::Cidr, 80.0)
            .with_score(PlatformId::Claude, MethodologyId::Scvs, 60.0);
        let rows = aggregate_by_platform(&table);
        assert_eq!(rows.len(), PLATFORM_COUNT);
        assert_eq!(rows[1].subject, PlatformId::Claude);
        assert_eq!(rows[1].average, 35.0);
        assert_eq!(rows[1].score_for(MethodologyId::Scvs), Some(60.0));
    }

    #[test]
    fn test_methodology_average_uses_full_denominator() {
        let table = ScoreTable::new().with_score(PlatformId::Perplexity, MethodologyId::Uifl, 50.0);
        let rows = aggregate_by_methodology(&table);
        assert_eq!(rows.len(), METHODOLOGY_COUNT);
        let uifl = &rows[3];
        assert_eq!(uifl.subject, MethodologyId::Uifl);
        assert_eq!(uifl.average, 10.0);
        assert_eq!(uifl.subject_name(), "UIFL");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(22.5), 23);
        assert_eq!(round_half_up(22.49), 22);
        assert_eq!(round_half_up(79.75), 80);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.6), -2);
    }

    #[test]
    fn test_grid_mean() {
        let mut table = ScoreTable::new();
        for platform in PlatformId::ALL {
            for methodology in MethodologyId::ALL {
                table = table.with_score(platform, methodology, 50.0);
            }
        }
        assert_eq!(grid_mean(&table), 50.0);
        assert_eq!(grid_mean(&ScoreTable::new()), 0.0);
    }

    #[test]
    fn test_overall_score_reads_payload_value() {
        let mut analysis = UrlAnalysis::new();
        analysis.overall.value = 67.0;
        assert_eq!(overall_score(&analysis), 67.0);
    }
}
