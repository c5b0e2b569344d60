//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod analyze;
mod dashboard;
mod render;

pub use analyze::run_analyze;
pub use dashboard::run_dashboard;
pub use render::run_render;

use crate::config::AppConfig;
use crate::pipeline::{
    auto_detect_format, exit_codes, output_report, threshold_exit_code, OutputTarget,
};
use crate::reports::{ReportFormat, ReportMetadata};
use crate::session::SearchState;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber at all
    Silent,
}

/// Output format a report command will use once `auto` is resolved.
///
/// [`ReportFormat::Tui`] means the command hands off to the dashboard.
#[must_use]
pub fn resolve_format(config: &AppConfig) -> ReportFormat {
    let target = OutputTarget::from_option(config.output.file.clone());
    auto_detect_format(config.output.format, &target)
}

/// Pick the log destination for a command.
///
/// The dashboard owns the terminal while it runs, so an interactive command
/// logs only to an explicit file.
#[must_use]
pub fn log_target(interactive: bool, log_file: Option<&Path>) -> LogTarget {
    match log_file {
        Some(path) => LogTarget::File(path.to_path_buf()),
        None if interactive => LogTarget::Silent,
        None => LogTarget::Stderr,
    }
}

/// Report a finished search and map it to an exit code.
fn report_state(
    state: &SearchState,
    config: &AppConfig,
    format: ReportFormat,
    metadata: &ReportMetadata,
    min_score: Option<f64>,
    quiet: bool,
) -> Result<i32> {
    match state {
        SearchState::Success { view, .. } => {
            output_report(view, metadata, format, &config.output, quiet)?;
            Ok(threshold_exit_code(view, min_score))
        }
        SearchState::Failed { message, .. } => {
            tracing::error!("{message}");
            Ok(exit_codes::REQUEST_FAILED)
        }
        other => {
            tracing::error!("Search ended in unexpected state: {}", other.name());
            Ok(exit_codes::ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_handoff_never_logs_to_stderr() {
        let config = AppConfig::builder().output_format(ReportFormat::Tui).build();
        assert_eq!(resolve_format(&config), ReportFormat::Tui);
        let interactive = resolve_format(&config) == ReportFormat::Tui;

        assert_eq!(log_target(interactive, None), LogTarget::Silent);
        let file = Path::new("/tmp/ai-visibility.log");
        assert_eq!(
            log_target(interactive, Some(file)),
            LogTarget::File(file.to_path_buf())
        );
    }

    #[test]
    fn test_report_formats_log_to_stderr() {
        let config = AppConfig::builder().output_format(ReportFormat::Json).build();
        let interactive = resolve_format(&config) == ReportFormat::Tui;
        assert!(!interactive);
        assert_eq!(log_target(interactive, None), LogTarget::Stderr);
    }

    #[test]
    fn test_auto_with_output_file_is_not_interactive() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Auto)
            .output_file(Some(PathBuf::from("/tmp/report.txt")))
            .build();
        assert_eq!(resolve_format(&config), ReportFormat::Summary);
    }
}
