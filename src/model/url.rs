//! The flat, named-category URL analysis shape.

use serde::Serialize;

use super::reference::{UrlCategoryId, URL_CATEGORY_COUNT};

/// Headline score of a URL analysis, read directly from the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallScore {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

/// Score and findings for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryScore {
    pub score: f64,
    pub findings: Vec<String>,
}

/// A normalized URL analysis: one entry per category, always complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UrlAnalysis {
    /// The analyzed URL, when the payload names it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub overall: OverallScore,
    categories: [CategoryScore; URL_CATEGORY_COUNT],
}

impl UrlAnalysis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(&self, id: UrlCategoryId) -> &CategoryScore {
        &self.categories[id.index()]
    }

    pub fn set_category(&mut self, id: UrlCategoryId, score: CategoryScore) {
        self.categories[id.index()] = score;
    }

    /// Categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = (UrlCategoryId, &CategoryScore)> + '_ {
        UrlCategoryId::ALL
            .into_iter()
            .map(move |id| (id, self.category(id)))
    }
}
