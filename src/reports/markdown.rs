//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_list, escape_markdown_table};
use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::model::{Dimension, MethodologyId, PlatformId};
use crate::presentation::{GridView, ResultView, ScoreBadge, SubjectCard, UrlView};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn rating(badge: &ScoreBadge) -> String {
    format!("{} {}", badge.label, badge.trend.symbol())
}

fn subject_table(
    out: &mut String,
    first_column: &str,
    columns: &[&str],
    cards: &[SubjectCard],
) -> std::fmt::Result {
    write!(out, "| {first_column} | Description |")?;
    for column in columns {
        write!(out, " {column} |")?;
    }
    writeln!(out, " Average | Rating |")?;
    write!(out, "|---|---|")?;
    for _ in columns {
        write!(out, "---:|")?;
    }
    writeln!(out, "---:|---|")?;

    for card in cards {
        write!(
            out,
            "| {} | {} |",
            escape_markdown_table(card.name),
            escape_markdown_table(card.description)
        )?;
        for row in &card.rows {
            write!(out, " {} |", row.display)?;
        }
        writeln!(
            out,
            " {} | {} |",
            card.badge.display,
            rating(&card.badge)
        )?;
    }
    writeln!(out)
}

fn grid(out: &mut String, view: &GridView) -> std::fmt::Result {
    writeln!(out, "# {}\n", escape_markdown_inline(&view.header.title))?;
    writeln!(out, "_{}_\n", view.header.description)?;
    if let Some(insights) = &view.header.insights {
        writeln!(out, "> {}\n", escape_markdown_inline(insights))?;
    }
    writeln!(
        out,
        "**Overall score:** {} ({})\n",
        view.overall.display,
        rating(&view.overall)
    )?;

    let methodology_labels: Vec<&str> = MethodologyId::ALL.iter().map(|m| m.label()).collect();
    let platform_labels: Vec<&str> = PlatformId::ALL.iter().map(|p| p.label()).collect();

    writeln!(out, "## By Platform\n")?;
    subject_table(out, "Platform", &methodology_labels, &view.platform_cards)?;

    writeln!(out, "## By Methodology\n")?;
    subject_table(out, "Methodology", &platform_labels, &view.methodology_cards)?;

    let comments: Vec<String> = view
        .platform_cards
        .iter()
        .flat_map(|card| {
            card.rows.iter().filter_map(move |row| {
                row.comment.as_ref().map(|comment| {
                    format!(
                        "- **{} / {}**: {}",
                        card.name,
                        row.label,
                        escape_markdown_list(comment)
                    )
                })
            })
        })
        .collect();
    if !comments.is_empty() {
        writeln!(out, "## Comments\n")?;
        for comment in comments {
            writeln!(out, "{comment}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn url(out: &mut String, view: &UrlView) -> std::fmt::Result {
    let title = ResultView::Url(view.clone()).title();
    writeln!(out, "# {}\n", escape_markdown_inline(&title))?;
    writeln!(
        out,
        "**Overall score:** {} ({})\n",
        view.overall.display,
        rating(&view.overall)
    )?;
    if let Some(interpretation) = &view.interpretation {
        writeln!(out, "> {}\n", escape_markdown_inline(interpretation))?;
    }

    writeln!(out, "| Category | Score | Rating |")?;
    writeln!(out, "|---|---:|---|")?;
    for category in &view.categories {
        writeln!(
            out,
            "| {} | {} | {} |",
            escape_markdown_table(category.label),
            category.badge.display,
            rating(&category.badge)
        )?;
    }
    writeln!(out)?;

    for category in view.categories.iter().filter(|c| !c.findings.is_empty()) {
        writeln!(out, "### {}\n", category.label)?;
        for finding in &category.findings {
            writeln!(out, "- {}", escape_markdown_list(finding))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        view: &ResultView,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        match view {
            ResultView::Grid(view) => grid(&mut out, view)?,
            ResultView::Url(view) => url(&mut out, view)?,
            ResultView::Unrecognized(view) => {
                writeln!(out, "# Unrecognized Result\n")?;
                writeln!(out, "{}\n", view.message)?;
                if !view.keys.is_empty() {
                    let keys: Vec<String> = view.keys.iter().map(|k| format!("`{k}`")).collect();
                    writeln!(out, "Fields present: {}\n", keys.join(", "))?;
                }
            }
        }
        writeln!(out, "---\n_{}_", metadata.footer())?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
