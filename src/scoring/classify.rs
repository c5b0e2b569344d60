//! Qualitative score bands.

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the Excellent band.
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Lower bound (inclusive) of the Good band.
pub const GOOD_THRESHOLD: f64 = 60.0;

/// Qualitative classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Below 60
    NeedsImprovement,
    /// 60 up to (not including) 80
    Good,
    /// 80 and above
    Excellent,
}

impl Band {
    /// Band for a score. Total over all reals; NaN falls into the lowest band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_THRESHOLD {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    #[must_use]
    pub const fn trend(self) -> Trend {
        match self {
            Self::Excellent => Trend::Up,
            Self::Good => Trend::Flat,
            Self::NeedsImprovement => Trend::Down,
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Directional indicator paired with a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Flat,
    Down,
}

impl Trend {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Flat => "→",
            Self::Down => "↓",
        }
    }

    /// ASCII fallback for plain-text output.
    #[must_use]
    pub const fn ascii(self) -> &'static str {
        match self {
            Self::Up => "^",
            Self::Flat => "-",
            Self::Down => "v",
        }
    }
}

/// Band and trend for one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub band: Band,
    pub trend: Trend,
}

/// Classify a score. Out-of-range values use the same thresholds.
#[must_use]
pub fn classify(score: f64) -> Rating {
    let band = Band::from_score(score);
    Rating {
        band,
        trend: band.trend(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(80.0).band, Band::Excellent);
        assert_eq!(classify(79.0).band, Band::Good);
        assert_eq!(classify(60.0).band, Band::Good);
        assert_eq!(classify(59.0).band, Band::NeedsImprovement);
        assert_eq!(classify(79.999).band, Band::Good);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(classify(-5.0).band, Band::NeedsImprovement);
        assert_eq!(classify(250.0).band, Band::Excellent);
        assert_eq!(classify(f64::NAN).band, Band::NeedsImprovement);
    }

    #[test]
    fn test_trend_follows_band() {
        assert_eq!(classify(95.0).trend, Trend::Up);
        assert_eq!(classify(65.0).trend, Trend::Flat);
        assert_eq!(classify(10.0).trend, Trend::Down);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Band::NeedsImprovement.to_string(), "Needs Improvement");
        assert_eq!(Band::Excellent.label(), "Excellent");
    }
}
