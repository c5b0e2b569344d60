//! Table report generator: aligned score matrices for the terminal.

use super::{ansi_color, band_color, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::model::{Dimension, MethodologyId};
use crate::presentation::{GridView, ResultView, ScoreBadge, UrlView};
use unicode_width::UnicodeWidthStr;

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
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

    /// Right-aligned score colored by band.
    fn score_cell(&self, badge: &ScoreBadge, width: usize) -> String {
        self.color(
            &format!("{:>width$}", badge.display),
            band_color(badge.band),
        )
    }

    fn grid(&self, lines: &mut Vec<String>, view: &GridView) {
        const SCORE_WIDTH: usize = 6;
        let name_width = view
            .platform_cards
            .iter()
            .map(|card| card.name.width())
            .chain(std::iter::once("Platform".width()))
            .max()
            .unwrap_or(0);

        let mut header = pad("Platform", name_width);
        for methodology in MethodologyId::ALL {
            header.push_str(&format!(" {:>SCORE_WIDTH$}", methodology.label()));
        }
        header.push_str(&format!(" {:>SCORE_WIDTH$}  Rating", "Avg"));
        lines.push(self.color(&header, "bold"));
        lines.push(self.color(&"-".repeat(header.width()), "dim"));

        for card in &view.platform_cards {
            let mut line = pad(card.name, name_width);
            for row in &card.rows {
                line.push(' ');
                line.push_str(&self.score_cell(&ScoreBadge::new(row.score), SCORE_WIDTH));
            }
            line.push(' ');
            line.push_str(&self.score_cell(&card.badge, SCORE_WIDTH));
            line.push_str(&format!("  {}", card.badge.label));
            lines.push(line);
        }

        lines.push(self.color(&"-".repeat(header.width()), "dim"));
        let mut footer = pad("Avg", name_width);
        for card in &view.methodology_cards {
            footer.push(' ');
            footer.push_str(&self.score_cell(&card.badge, SCORE_WIDTH));
        }
        footer.push(' ');
        footer.push_str(&self.score_cell(&view.overall, SCORE_WIDTH));
        footer.push_str(&format!("  {}", view.overall.label));
        lines.push(footer);
    }

    fn url(&self, lines: &mut Vec<String>, view: &UrlView) {
        let name_width = view
            .categories
            .iter()
            .map(|c| c.label.width())
            .chain(std::iter::once("Category".width()))
            .max()
            .unwrap_or(0);

        let header = format!("{} {:>5}  Rating", pad("Category", name_width), "Score");
        lines.push(self.color(&header, "bold"));
        lines.push(self.color(&"-".repeat(header.width()), "dim"));
        for category in &view.categories {
            lines.push(format!(
                "{} {}  {}",
                pad(category.label, name_width),
                self.score_cell(&category.badge, 5),
                category.badge.label
            ));
        }
        lines.push(self.color(&"-".repeat(header.width()), "dim"));
        lines.push(format!(
            "{} {}  {}",
            pad("Overall", name_width),
            self.score_cell(&view.overall, 5),
            view.overall.label
        ));
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        view: &ResultView,
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut lines = vec![self.color(&view.title(), "bold"), String::new()];
        match view {
            ResultView::Grid(grid) => self.grid(&mut lines, grid),
            ResultView::Url(url) => self.url(&mut lines, url),
            ResultView::Unrecognized(unrecognized) => lines.push(unrecognized.message.clone()),
        }
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Left-align text to a display width.
fn pad(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(text.width())));
    padded
}
