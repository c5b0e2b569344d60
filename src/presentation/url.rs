//! View-models for the flat URL analysis.

use serde::Serialize;

use super::badge::ScoreBadge;
use crate::model::UrlAnalysis;
use crate::scoring::overall_score;

/// Card for one URL-analysis category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCard {
    pub key: &'static str,
    pub label: &'static str,
    pub badge: ScoreBadge,
    pub progress: u16,
    pub findings: Vec<String>,
}

/// Everything the URL-analysis view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub overall: ScoreBadge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    pub categories: Vec<CategoryCard>,
}

impl UrlView {
    #[must_use]
    pub fn from_analysis(analysis: &UrlAnalysis) -> Self {
        Self {
            url: analysis.url.clone(),
            overall: ScoreBadge::new(overall_score(analysis)),
            interpretation: analysis.overall.interpretation.clone(),
            categories: analysis
                .categories()
                .map(|(id, category)| {
                    let badge = ScoreBadge::new(category.score);
                    CategoryCard {
                        key: id.key(),
                        label: id.label(),
                        badge,
                        progress: badge.progress(),
                        findings: category.findings.clone(),
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryScore, UrlCategoryId, URL_CATEGORY_COUNT};
    use crate::scoring::Band;

    #[test]
    fn test_url_view_keeps_category_order() {
        let mut analysis = UrlAnalysis::new();
        analysis.overall.value = 64.0;
        analysis.set_category(
            UrlCategoryId::SourceCredibility,
            CategoryScore {
                score: 85.0,
                findings: vec!["Cites primary sources".to_string()],
            },
        );

        let view = UrlView::from_analysis(&analysis);
        assert_eq!(view.overall.band, Band::Good);
        assert_eq!(view.categories.len(), URL_CATEGORY_COUNT);
        assert_eq!(view.categories[0].label, "Content Quality");
        assert_eq!(view.categories[2].badge.band, Band::Excellent);
        assert_eq!(view.categories[2].findings, vec!["Cites primary sources"]);
        assert_eq!(view.categories[6].label, "Technical SEO");
    }
}
