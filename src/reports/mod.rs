//! Report generation for analysis results.
//!
//! This module provides multiple headless output formats for a
//! [`ResultView`]:
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//! - Summary: Compact shell-friendly output
//! - Table: Aligned tabular terminal output
//!
//! The interactive format is handled by [`crate::tui`].

pub mod escape;
mod json;
mod markdown;
mod summary;
mod table;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use table::TableReporter;
pub use types::{ReportFormat, ReportMetadata};

use crate::presentation::ResultView;
use crate::scoring::Band;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a result view
    fn generate(&self, view: &ResultView, metadata: &ReportMetadata)
        -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        view: &ResultView,
        metadata: &ReportMetadata,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(view, metadata)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json | ReportFormat::Tui => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Terminal color name for a band.
pub(crate) const fn band_color(band: Band) -> &'static str {
    match band {
        Band::Excellent => "green",
        Band::Good => "yellow",
        Band::NeedsImprovement => "red",
    }
}
