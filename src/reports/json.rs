//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::presentation::ResultView;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    headline_score: Option<i64>,
    result: &'a ResultView,
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        view: &ResultView,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let report = JsonReport {
            metadata,
            headline_score: view.headline().map(|badge| badge.display),
            result: view,
        };

        let output = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        output.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResult, GridAnalysis, MethodologyId, PlatformId, ScoreTable};

    #[test]
    fn test_json_report_structure() {
        let result = AnalysisResult::Grid(GridAnalysis {
            subject: Some("Acme".to_string()),
            insights: None,
            table: ScoreTable::new().with_score(PlatformId::ChatGpt, MethodologyId::Cidr, 90.0),
        });
        let view = ResultView::from_result(&result);
        let metadata = ReportMetadata::new(Some("Acme".to_string()), None);

        let output = JsonReporter::new().pretty(false).generate(&view, &metadata).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["metadata"]["tool"], "ai-visibility");
        assert_eq!(json["metadata"]["query"], "Acme");
        assert!(json["metadata"]["generated_at"].is_string());
        assert_eq!(json["headline_score"], 5);
        assert_eq!(json["result"]["kind"], "grid");
        assert_eq!(json["result"]["platform_chart"][0]["score"], 23);
        assert_eq!(json["result"]["platform_cards"][0]["badge"]["band"], "needs_improvement");
    }
}
