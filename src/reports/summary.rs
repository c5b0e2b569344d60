//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ansi_color, band_color, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::presentation::{
    GridView, ResultView, ScoreBadge, SubjectCard, UnrecognizedView, UrlView,
};
use unicode_width::UnicodeWidthStr;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn badge(&self, badge: &ScoreBadge) -> String {
        let trend = if self.colored {
            badge.trend.symbol()
        } else {
            badge.trend.ascii()
        };
        self.color(
            &format!("{:>3}  {} {}", badge.display, badge.label, trend),
            band_color(badge.band),
        )
    }

    fn header(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
    }

    fn cards(&self, lines: &mut Vec<String>, heading: &str, cards: &[SubjectCard]) {
        lines.push(self.color(heading, "bold"));
        let width = cards
            .iter()
            .map(|card| card.name.width())
            .max()
            .unwrap_or(0);
        for card in cards {
            lines.push(format!(
                "  {}{}  {}",
                card.name,
                " ".repeat(width - card.name.width()),
                self.badge(&card.badge)
            ));
        }
    }

    fn grid(&self, lines: &mut Vec<String>, view: &GridView) {
        self.header(lines, &view.header.title);
        lines.push(view.header.description.clone());
        if let Some(insights) = &view.header.insights {
            lines.push(format!("{}  {}", self.color("Insights:", "cyan"), insights));
        }
        lines.push(String::new());
        lines.push(format!(
            "{}  {}",
            self.color("Overall:", "cyan"),
            self.badge(&view.overall)
        ));
        lines.push(String::new());
        self.cards(lines, "Platforms:", &view.platform_cards);
        lines.push(String::new());
        self.cards(lines, "Methodologies:", &view.methodology_cards);
    }

    fn url(&self, lines: &mut Vec<String>, view: &UrlView) {
        self.header(lines, &ResultView::Url(view.clone()).title());
        lines.push(format!(
            "{}  {}",
            self.color("Overall:", "cyan"),
            self.badge(&view.overall)
        ));
        if let Some(interpretation) = &view.interpretation {
            lines.push(format!(
                "{}  {}",
                self.color("Interpretation:", "cyan"),
                interpretation
            ));
        }
        lines.push(String::new());
        lines.push(self.color("Categories:", "bold"));

        let width = view
            .categories
            .iter()
            .map(|c| c.label.width())
            .max()
            .unwrap_or(0);
        for category in &view.categories {
            lines.push(format!(
                "  {}{}  {}",
                category.label,
                " ".repeat(width - category.label.width()),
                self.badge(&category.badge)
            ));
            for finding in &category.findings {
                lines.push(format!("      {} {}", self.color("•", "dim"), finding));
            }
        }
    }

    fn unrecognized(&self, lines: &mut Vec<String>, view: &UnrecognizedView) {
        self.header(lines, "Unrecognized Result");
        lines.push(self.color(&view.message, "yellow"));
        if !view.keys.is_empty() {
            lines.push(format!(
                "{}  {}",
                self.color("Fields:", "cyan"),
                view.keys.join(", ")
            ));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        view: &ResultView,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        match view {
            ResultView::Grid(grid) => self.grid(&mut lines, grid),
            ResultView::Url(url) => self.url(&mut lines, url),
            ResultView::Unrecognized(unrecognized) => self.unrecognized(&mut lines, unrecognized),
        }

        lines.push(String::new());
        lines.push(self.color(&metadata.footer(), "dim"));
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
