//! Score normalization.
//!
//! Turns an untyped service response into the dense structures in
//! [`crate::model`]. Every function here is total: missing fields, nulls and
//! values of the wrong type collapse to defaults instead of failing.

use serde_json::Value;

use crate::model::{
    AnalysisResult, CategoryScore, Dimension, GridAnalysis, MethodologyId, OverallScore, PlatformId,
    ResultSchema, ScoreCell, ScoreTable, UrlAnalysis, UrlCategoryId,
};

/// Member of the optional response envelope that carries the payload.
const ENVELOPE_KEY: &str = "data";

/// Strip a `{ "data": { ... } }` envelope.
///
/// Only an object-valued `data` member is unwrapped; anything else is
/// returned unchanged.
#[must_use]
pub fn unwrap_envelope(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) if map.get(ENVELOPE_KEY).is_some_and(Value::is_object) => map
            .remove(ENVELOPE_KEY)
            .unwrap_or(Value::Object(serde_json::Map::new())),
        other => other,
    }
}

/// Build the full score table from a grid-shaped response.
#[must_use]
pub fn normalize(raw: &Value) -> ScoreTable {
    let mut table = ScoreTable::new();
    for platform in PlatformId::ALL {
        let Some(scores) = raw.get(platform.scores_key()) else {
            continue;
        };
        for methodology in MethodologyId::ALL {
            if let Some(cell) = scores.get(methodology.key()) {
                table.set(platform, methodology, score_cell(cell));
            }
        }
    }
    table
}

/// Normalize a grid-shaped response including its subject and insights.
#[must_use]
pub fn normalize_grid(raw: &Value) -> GridAnalysis {
    GridAnalysis {
        subject: text(raw, "company_name").or_else(|| text(raw, "url")),
        insights: text(raw, "insights"),
        table: normalize(raw),
    }
}

/// Normalize a flat URL-analysis response.
#[must_use]
pub fn normalize_url(raw: &Value) -> UrlAnalysis {
    let mut analysis = UrlAnalysis::new();
    analysis.url = text(raw, "url");

    if let Some(overall) = raw.get("overall_score") {
        analysis.overall = OverallScore {
            value: number(overall.get("value")),
            interpretation: text(overall, "interpretation"),
        };
    }

    for category in UrlCategoryId::ALL {
        if let Some(entry) = raw.get(category.key()) {
            analysis.set_category(
                category,
                CategoryScore {
                    score: number(entry.get("score")),
                    findings: findings(entry),
                },
            );
        }
    }
    analysis
}

/// Detect which known shape a response has, if any.
///
/// A platform score key marks a grid; `overall_score` or any category key
/// marks a URL analysis. Grid wins when both are present. Failing both, a
/// `company_name` or `insights` member still marks a grid whose scores are
/// all absent.
#[must_use]
pub fn detect(raw: &Value) -> Option<ResultSchema> {
    let map = raw.as_object()?;
    if PlatformId::ALL
        .into_iter()
        .any(|p| map.contains_key(&p.scores_key()))
    {
        return Some(ResultSchema::Grid);
    }
    if map.contains_key("overall_score")
        || UrlCategoryId::ALL
            .into_iter()
            .any(|c| map.contains_key(c.key()))
    {
        return Some(ResultSchema::UrlAnalysis);
    }
    if map.contains_key("company_name") || map.contains_key("insights") {
        return Some(ResultSchema::Grid);
    }
    None
}

/// Interpret a response under the given schema.
///
/// An explicit schema always produces its own variant. [`ResultSchema::Auto`]
/// falls back to [`detect`] and yields [`AnalysisResult::Unrecognized`] when
/// no known shape is found.
#[must_use]
pub fn interpret(raw: &Value, schema: ResultSchema) -> AnalysisResult {
    let resolved = match schema {
        ResultSchema::Auto => detect(raw),
        explicit => Some(explicit),
    };
    match resolved {
        Some(ResultSchema::Grid) => AnalysisResult::Grid(normalize_grid(raw)),
        Some(ResultSchema::UrlAnalysis) => AnalysisResult::Url(normalize_url(raw)),
        Some(ResultSchema::Auto) | None => {
            let keys = raw
                .as_object()
                .map(|map| map.keys().cloned().collect())
                .unwrap_or_default();
            tracing::debug!(?keys, "response matched no known result shape");
            AnalysisResult::Unrecognized { keys }
        }
    }
}

fn score_cell(raw: &Value) -> ScoreCell {
    ScoreCell {
        score: number(raw.get("score")),
        comment: text(raw, "comment"),
    }
}

/// Read a JSON number; anything else is 0.
fn number(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}

/// Read a non-empty string member.
fn text(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn findings(raw: &Value) -> Vec<String> {
    raw.get("findings")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::grid_mean;
    use serde_json::json;

    #[test]
    fn test_empty_object_yields_zero_table() {
        let table = normalize(&json!({}));
        assert!(table.iter().all(|(_, _, cell)| cell.score == 0.0));
    }

    #[test]
    fn test_wrong_types_coerce_to_default() {
        let raw = json!({
            "chatgpt_scores": {
                "cidr": {"score": "90"},
                "scvs": {"score": null, "comment": 5},
                "acso": 75,
                "uifl": {"score": 61.5, "comment": ""}
            },
            "claude_scores": "not an object",
            "perplexity_scores": null
        });
        let table = normalize(&raw);
        assert_eq!(table.score(PlatformId::ChatGpt, MethodologyId::Cidr), 0.0);
        assert_eq!(table.score(PlatformId::ChatGpt, MethodologyId::Scvs), 0.0);
        assert_eq!(table.score(PlatformId::ChatGpt, MethodologyId::Acso), 0.0);
        assert_eq!(table.score(PlatformId::ChatGpt, MethodologyId::Uifl), 61.5);
        assert!(table
            .cell(PlatformId::ChatGpt, MethodologyId::Uifl)
            .comment
            .is_none());
        assert_eq!(table.score(PlatformId::Claude, MethodologyId::Cidr), 0.0);
    }

    #[test]
    fn test_comment_kept_when_present() {
        let raw = json!({"arc_search_scores": {"acso": {"score": 82, "comment": "clean headings"}}});
        let table = normalize(&raw);
        let cell = table.cell(PlatformId::ArcSearch, MethodologyId::Acso);
        assert_eq!(cell.score, 82.0);
        assert_eq!(cell.comment.as_deref(), Some("clean headings"));
    }

    #[test]
    fn test_out_of_range_scores_pass_through() {
        let raw = json!({"searchgpt_scores": {"uifl": {"score": -12}, "cidr": {"score": 140}}});
        let table = normalize(&raw);
        assert_eq!(table.score(PlatformId::SearchGpt, MethodologyId::Uifl), -12.0);
        assert_eq!(table.score(PlatformId::SearchGpt, MethodologyId::Cidr), 140.0);
    }

    #[test]
    fn test_grid_subject_falls_back_to_url() {
        let grid = normalize_grid(&json!({"url": "https://example.com", "insights": ""}));
        assert_eq!(grid.subject.as_deref(), Some("https://example.com"));
        assert!(grid.insights.is_none());

        let grid = normalize_grid(&json!({"company_name": "Acme", "url": "https://acme.test"}));
        assert_eq!(grid.subject.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_url_analysis_normalization() {
        let raw = json!({
            "url": "https://example.com",
            "overall_score": {"value": 72, "interpretation": "Solid"},
            "content_quality": {"score": 80, "findings": ["Clear copy", 3, null, "Good depth"]},
            "technical_seo": {"score": "high"}
        });
        let analysis = normalize_url(&raw);
        assert_eq!(analysis.url.as_deref(), Some("https://example.com"));
        assert_eq!(analysis.overall.value, 72.0);
        assert_eq!(analysis.overall.interpretation.as_deref(), Some("Solid"));

        let quality = analysis.category(UrlCategoryId::ContentQuality);
        assert_eq!(quality.score, 80.0);
        assert_eq!(quality.findings, vec!["Clear copy", "Good depth"]);

        let seo = analysis.category(UrlCategoryId::TechnicalSeo);
        assert_eq!(seo.score, 0.0);
        assert!(seo.findings.is_empty());
    }

    #[test]
    fn test_unwrap_envelope() {
        let wrapped = json!({"data": {"chatgpt_scores": {}}, "status": "ok"});
        assert_eq!(unwrap_envelope(wrapped), json!({"chatgpt_scores": {}}));

        let scalar_data = json!({"data": 5});
        assert_eq!(unwrap_envelope(scalar_data.clone()), scalar_data);

        let bare = json!({"claude_scores": {}});
        assert_eq!(unwrap_envelope(bare.clone()), bare);
    }

    #[test]
    fn test_detect() {
        assert_eq!(detect(&json!({"claude_scores": {}})), Some(ResultSchema::Grid));
        assert_eq!(
            detect(&json!({"overall_score": {"value": 50}})),
            Some(ResultSchema::UrlAnalysis)
        );
        assert_eq!(
            detect(&json!({"source_credibility": {}})),
            Some(ResultSchema::UrlAnalysis)
        );
        assert_eq!(detect(&json!({"message": "hi"})), None);
        assert_eq!(detect(&json!([1, 2])), None);
    }

    #[test]
    fn test_detect_subject_only_is_empty_grid() {
        assert_eq!(
            detect(&json!({"company_name": "Acme"})),
            Some(ResultSchema::Grid)
        );
        assert_eq!(
            detect(&json!({"insights": "Nothing indexed yet"})),
            Some(ResultSchema::Grid)
        );
        assert_eq!(
            detect(&json!({"company_name": "Acme", "overall_score": {"value": 40}})),
            Some(ResultSchema::UrlAnalysis)
        );

        match interpret(&json!({"company_name": "Acme"}), ResultSchema::Auto) {
            AnalysisResult::Grid(grid) => {
                assert_eq!(grid.subject.as_deref(), Some("Acme"));
                assert_eq!(grid_mean(&grid.table), 0.0);
            }
            other => panic!("expected Grid, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_explicit_schema_is_total() {
        let result = interpret(&json!({}), ResultSchema::Grid);
        assert!(matches!(result, AnalysisResult::Grid(_)));

        let result = interpret(&json!("text"), ResultSchema::UrlAnalysis);
        assert!(matches!(result, AnalysisResult::Url(_)));
    }

    #[test]
    fn test_interpret_auto_unrecognized_lists_keys() {
        let result = interpret(&json!({"status": "queued", "job": 7}), ResultSchema::Auto);
        match result {
            AnalysisResult::Unrecognized { keys } => {
                assert_eq!(keys, vec!["job".to_string(), "status".to_string()]);
            }
            other => panic!("expected Unrecognized, got {other:?}"),
        }
    }
}
