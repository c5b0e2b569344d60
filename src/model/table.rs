//! The normalized platform × methodology score table.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::reference::{MethodologyId, PlatformId, METHODOLOGY_COUNT, PLATFORM_COUNT};

/// The atomic unit of evaluation for one (platform, methodology) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreCell {
    /// Score as sent by the service; nominally 0-100 but not range-checked
    pub score: f64,
    /// Free-text comment, present only when the service sent a non-empty one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ScoreCell {
    /// Create a cell with a score and no comment.
    #[must_use]
    pub const fn new(score: f64) -> Self {
        Self {
            score,
            comment: None,
        }
    }

    /// Attach a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Total mapping of every (platform, methodology) pair to a [`ScoreCell`].
///
/// The table is dense: a cell exists for each pair of the static reference
/// lists, and cells the service did not send hold the default score of 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    cells: [[ScoreCell; METHODOLOGY_COUNT]; PLATFORM_COUNT],
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| ScoreCell::default())),
        }
    }
}

impl ScoreTable {
    /// Create a table with every cell at the default score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(&self, platform: PlatformId, methodology: MethodologyId) -> &ScoreCell {
        &self.cells[platform.index()][methodology.index()]
    }

    #[must_use]
    pub fn score(&self, platform: PlatformId, methodology: MethodologyId) -> f64 {
        self.cell(platform, methodology).score
    }

    /// Replace one cell.
    pub fn set(&mut self, platform: PlatformId, methodology: MethodologyId, cell: ScoreCell) {
        self.cells[platform.index()][methodology.index()] = cell;
    }

    /// Builder-style variant of [`ScoreTable::set`] for a bare score.
    #[must_use]
    pub fn with_score(mut self, platform: PlatformId, methodology: MethodologyId, score: f64) -> Self {
        self.set(platform, methodology, ScoreCell::new(score));
        self
    }

    /// One platform's scores, in methodology order.
    #[must_use]
    pub fn platform_scores(&self, platform: PlatformId) -> [f64; METHODOLOGY_COUNT] {
        std::array::from_fn(|m| self.cells[platform.index()][m].score)
    }

    /// One methodology's scores, in platform order.
    #[must_use]
    pub fn methodology_scores(&self, methodology: MethodologyId) -> [f64; PLATFORM_COUNT] {
        std::array::from_fn(|p| self.cells[p][methodology.index()].score)
    }

    /// Iterate over every cell with its coordinates, platform-major.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, MethodologyId, &ScoreCell)> + '_ {
        PlatformId::ALL.into_iter().flat_map(move |p| {
            MethodologyId::ALL
                .into_iter()
                .map(move |m| (p, m, self.cell(p, m)))
        })
    }
}

// Serialized in the wire layout: `{ "<platform>_scores": { "<methodology>": cell } }`.
impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PLATFORM_COUNT))?;
        for platform in PlatformId::ALL {
            let row: indexmap::IndexMap<MethodologyId, &ScoreCell> = MethodologyId::ALL
                .into_iter()
                .map(|m| (m, self.cell(platform, m)))
                .collect();
            map.serialize_entry(&platform.scores_key(), &row)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_dense_and_zero() {
        let table = ScoreTable::new();
        assert_eq!(table.iter().count(), PLATFORM_COUNT * METHODOLOGY_COUNT);
        assert!(table.iter().all(|(_, _, cell)| cell.score == 0.0 && cell.comment.is_none()));
    }

    #[test]
    fn test_row_and_column_views() {
        let table = ScoreTable::new()
            .with_score(PlatformId::Claude, MethodologyId::Scvs, 70.0)
            .with_score(PlatformId::SearchGpt, MethodologyId::Scvs, 40.0);

        assert_eq!(
            table.platform_scores(PlatformId::Claude),
            [0.0, 70.0, 0.0, 0.0]
        );
        assert_eq!(
            table.methodology_scores(MethodologyId::Scvs),
            [0.0, 70.0, 0.0, 0.0, 40.0]
        );
    }

    #[test]
    fn test_serializes_in_wire_layout() {
        let mut table = ScoreTable::new();
        table.set(
            PlatformId::ChatGpt,
            MethodologyId::Cidr,
            ScoreCell::new(90.0).with_comment("strong intent match"),
        );
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["chatgpt_scores"]["cidr"]["score"], 90.0);
        assert_eq!(
            json["chatgpt_scores"]["cidr"]["comment"],
            "strong intent match"
        );
        assert!(json["claude_scores"]["uifl"].get("comment").is_none());
    }
}
