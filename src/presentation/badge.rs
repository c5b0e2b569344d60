//! Score badges and progress values shared by every view.

use serde::Serialize;

use crate::scoring::{classify, round_half_up, Band, Trend};

/// A score ready for display: rounded value plus its classification.
///
/// The band is derived from the unrounded value, so a 79.75 average shows as
/// `80` but is still Good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBadge {
    /// Unrounded score
    pub value: f64,
    /// Half-up rounded score
    pub display: i64,
    pub band: Band,
    pub trend: Trend,
    pub label: &'static str,
}

impl ScoreBadge {
    #[must_use]
    pub fn new(value: f64) -> Self {
        let rating = classify(value);
        Self {
            value,
            display: round_half_up(value),
            band: rating.band,
            trend: rating.trend,
            label: rating.band.label(),
        }
    }

    /// Progress-bar position in `0..=100`.
    #[must_use]
    pub fn progress(&self) -> u16 {
        progress(self.value)
    }
}

/// Clamp a score to a progress-bar position in `0..=100`.
#[must_use]
pub fn progress(score: f64) -> u16 {
    if score.is_nan() {
        return 0;
    }
    round_half_up(score.clamp(0.0, 100.0)).clamp(0, 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classifies_unrounded_value() {
        let badge = ScoreBadge::new(79.75);
        assert_eq!(badge.display, 80);
        assert_eq!(badge.band, Band::Good);
        assert_eq!(badge.label, "Good");
        assert_eq!(badge.trend, Trend::Flat);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(progress(-20.0), 0);
        assert_eq!(progress(22.5), 23);
        assert_eq!(progress(180.0), 100);
        assert_eq!(progress(f64::NAN), 0);
        assert_eq!(ScoreBadge::new(140.0).band, Band::Excellent);
    }
}
