//! Static reference data: the scored platforms, the scoring methodologies and
//! the categories of the flat URL analysis.
//!
//! These lists are process-wide constants. They are never derived from a
//! response; a response can only fill in scores for entries listed here.

use serde::{Deserialize, Serialize};

/// Number of scored platforms.
pub const PLATFORM_COUNT: usize = 5;

/// Number of scoring methodologies applied per platform.
pub const METHODOLOGY_COUNT: usize = 4;

/// Number of categories in a URL analysis.
pub const URL_CATEGORY_COUNT: usize = 7;

/// Common naming surface shared by platforms and methodologies.
///
/// An aggregate row is keyed by one of these and broken down by the other, so
/// presentation code works against this trait rather than a concrete id.
pub trait Dimension: Copy {
    /// Wire identifier (e.g. `chatgpt`, `cidr`)
    fn key(self) -> &'static str;

    /// Short display name
    fn label(self) -> &'static str;

    /// Secondary line: provider for platforms, full name for methodologies
    fn description(self) -> &'static str;
}

// ============================================================================
// Platforms
// ============================================================================

/// Identifier of a scored AI platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlatformId {
    #[serde(rename = "chatgpt")]
    ChatGpt,
    #[serde(rename = "claude")]
    Claude,
    #[serde(rename = "perplexity")]
    Perplexity,
    #[serde(rename = "arc_search")]
    ArcSearch,
    #[serde(rename = "searchgpt")]
    SearchGpt,
}

/// A scored platform with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub id: PlatformId,
    pub display_name: &'static str,
    pub provider: &'static str,
}

/// All platforms, in display order.
pub static PLATFORMS: [Platform; PLATFORM_COUNT] = [
    Platform {
        id: PlatformId::ChatGpt,
        display_name: "ChatGPT",
        provider: "OpenAI",
    },
    Platform {
        id: PlatformId::Claude,
        display_name: "Claude",
        provider: "Anthropic",
    },
    Platform {
        id: PlatformId::Perplexity,
        display_name: "Perplexity AI",
        provider: "Perplexity",
    },
    Platform {
        id: PlatformId::ArcSearch,
        display_name: "Arc Search",
        provider: "The Browser Company",
    },
    Platform {
        id: PlatformId::SearchGpt,
        display_name: "SearchGPT",
        provider: "OpenAI",
    },
];

impl PlatformId {
    /// All platform ids, in display order.
    pub const ALL: [Self; PLATFORM_COUNT] = [
        Self::ChatGpt,
        Self::Claude,
        Self::Perplexity,
        Self::ArcSearch,
        Self::SearchGpt,
    ];

    /// Position in [`PLATFORMS`] and in score tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ChatGpt => 0,
            Self::Claude => 1,
            Self::Perplexity => 2,
            Self::ArcSearch => 3,
            Self::SearchGpt => 4,
        }
    }

    /// Display metadata for this platform.
    #[must_use]
    pub fn info(self) -> &'static Platform {
        &PLATFORMS[self.index()]
    }

    /// Key of this platform's score object in a grid response.
    #[must_use]
    pub fn scores_key(self) -> String {
        format!("{}_scores", self.key())
    }

    /// Look up a platform by wire identifier.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl Dimension for PlatformId {
    fn key(self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt",
            Self::Claude => "claude",
            Self::Perplexity => "perplexity",
            Self::ArcSearch => "arc_search",
            Self::SearchGpt => "searchgpt",
        }
    }

    fn label(self) -> &'static str {
        self.info().display_name
    }

    fn description(self) -> &'static str {
        self.info().provider
    }
}

// ============================================================================
// Methodologies
// ============================================================================

/// Identifier of a scoring methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodologyId {
    Cidr,
    Scvs,
    Acso,
    Uifl,
}

/// A scoring methodology with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Methodology {
    pub id: MethodologyId,
    pub short_name: &'static str,
    pub full_name: &'static str,
}

/// All methodologies, in display order.
pub static METHODOLOGIES: [Methodology; METHODOLOGY_COUNT] = [
    Methodology {
        id: MethodologyId::Cidr,
        short_name: "CIDR",
        full_name: "Contextual Intent-Driven Ranking",
    },
    Methodology {
        id: MethodologyId::Scvs,
        short_name: "SCVS",
        full_name: "Source Credibility & Verifiability Score",
    },
    Methodology {
        id: MethodologyId::Acso,
        short_name: "ACSO",
        full_name: "Adaptive Content Structure Optimization",
    },
    Methodology {
        id: MethodologyId::Uifl,
        short_name: "UIFL",
        full_name: "User Interaction & Feedback Loop",
    },
];

impl MethodologyId {
    /// All methodology ids, in display order.
    pub const ALL: [Self; METHODOLOGY_COUNT] = [Self::Cidr, Self::Scvs, Self::Acso, Self::Uifl];

    /// Position in [`METHODOLOGIES`] and in score tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Cidr => 0,
            Self::Scvs => 1,
            Self::Acso => 2,
            Self::Uifl => 3,
        }
    }

    /// Display metadata for this methodology.
    #[must_use]
    pub fn info(self) -> &'static Methodology {
        &METHODOLOGIES[self.index()]
    }

    /// Look up a methodology by wire identifier.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl Dimension for MethodologyId {
    fn key(self) -> &'static str {
        match self {
            Self::Cidr => "cidr",
            Self::Scvs => "scvs",
            Self::Acso => "acso",
            Self::Uifl => "uifl",
        }
    }

    fn label(self) -> &'static str {
        self.info().short_name
    }

    fn description(self) -> &'static str {
        self.info().full_name
    }
}

// ============================================================================
// URL analysis categories
// ============================================================================

/// Named category of the flat URL analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlCategoryId {
    ContentQuality,
    RelevanceAndIntent,
    SourceCredibility,
    ContentStructure,
    FreshnessAndTimeliness,
    UserEngagementPotential,
    TechnicalSeo,
}

/// All URL analysis categories, in display order.
pub static URL_CATEGORIES: [UrlCategoryId; URL_CATEGORY_COUNT] = UrlCategoryId::ALL;

impl UrlCategoryId {
    /// All categories, in display order.
    pub const ALL: [Self; URL_CATEGORY_COUNT] = [
        Self::ContentQuality,
        Self::RelevanceAndIntent,
        Self::SourceCredibility,
        Self::ContentStructure,
        Self::FreshnessAndTimeliness,
        Self::UserEngagementPotential,
        Self::TechnicalSeo,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ContentQuality => 0,
            Self::RelevanceAndIntent => 1,
            Self::SourceCredibility => 2,
            Self::ContentStructure => 3,
            Self::FreshnessAndTimeliness => 4,
            Self::UserEngagementPotential => 5,
            Self::TechnicalSeo => 6,
        }
    }

    /// Wire key of this category in a URL analysis response.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ContentQuality => "content_quality",
            Self::RelevanceAndIntent => "relevance_and_intent",
            Self::SourceCredibility => "source_credibility",
            Self::ContentStructure => "content_structure",
            Self::FreshnessAndTimeliness => "freshness_and_timeliness",
            Self::UserEngagementPotential => "user_engagement_potential",
            Self::TechnicalSeo => "technical_seo",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ContentQuality => "Content Quality",
            Self::RelevanceAndIntent => "Relevance & Intent",
            Self::SourceCredibility => "Source Credibility",
            Self::ContentStructure => "Content Structure",
            Self::FreshnessAndTimeliness => "Freshness & Timeliness",
            Self::UserEngagementPotential => "User Engagement Potential",
            Self::TechnicalSeo => "Technical SEO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_reference_order() {
        for (i, platform) in PLATFORMS.iter().enumerate() {
            assert_eq!(platform.id.index(), i);
            assert_eq!(PlatformId::ALL[i], platform.id);
        }
        for (i, methodology) in METHODOLOGIES.iter().enumerate() {
            assert_eq!(methodology.id.index(), i);
            assert_eq!(MethodologyId::ALL[i], methodology.id);
        }
        for (i, category) in UrlCategoryId::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_scores_key() {
        assert_eq!(PlatformId::ChatGpt.scores_key(), "chatgpt_scores");
        assert_eq!(PlatformId::ArcSearch.scores_key(), "arc_search_scores");
    }

    #[test]
    fn test_key_roundtrip() {
        for id in PlatformId::ALL {
            assert_eq!(PlatformId::from_key(id.key()), Some(id));
        }
        for id in MethodologyId::ALL {
            assert_eq!(MethodologyId::from_key(id.key()), Some(id));
        }
        assert_eq!(PlatformId::from_key("bard"), None);
    }

    #[test]
    fn test_serde_keys_match_wire_keys() {
        for id in PlatformId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
        for id in MethodologyId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
        for id in UrlCategoryId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_dimension_labels() {
        assert_eq!(PlatformId::Perplexity.label(), "Perplexity AI");
        assert_eq!(PlatformId::ArcSearch.description(), "The Browser Company");
        assert_eq!(MethodologyId::Scvs.label(), "SCVS");
        assert_eq!(
            MethodologyId::Uifl.description(),
            "User Interaction & Feedback Loop"
        );
    }
}
