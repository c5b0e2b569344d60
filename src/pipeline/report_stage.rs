//! Report output stage.

use crate::config::OutputConfig;
use crate::presentation::ResultView;
use crate::reports::{create_reporter_with_options, ReportFormat, ReportMetadata};
use anyhow::Result;

use super::{should_use_color, write_output, OutputTarget};

/// Render a result view in a headless format and write it out.
///
/// `format` must already be resolved; [`ReportFormat::Tui`] falls back to
/// JSON here since the interactive view is not a text report.
pub fn output_report(
    view: &ResultView,
    metadata: &ReportMetadata,
    format: ReportFormat,
    output: &OutputConfig,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let use_color = should_use_color(output.no_color) && target.is_terminal();
    let reporter = create_reporter_with_options(format, use_color);
    tracing::debug!("Writing {} report", reporter.format());
    let report = reporter.generate(view, metadata)?;
    write_output(&report, &target, quiet)
}
