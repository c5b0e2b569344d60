//! Render command handler.
//!
//! Implements the `render` subcommand: a saved service response is pushed
//! through the same interpret and report stages as a live request.

use crate::client::FileBackend;
use crate::config::AppConfig;
use crate::reports::{ReportFormat, ReportMetadata};
use crate::session::Orchestrator;
use crate::tui::{set_theme, DashboardApp, Theme};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Run the render command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_render(
    config: &AppConfig,
    path: &Path,
    min_score: Option<f64>,
    quiet: bool,
) -> Result<i32> {
    let backend = Arc::new(FileBackend::new(path, config.api.unwrap_envelope));
    let query = path.display().to_string();

    let format = super::resolve_format(config);
    if format == ReportFormat::Tui {
        set_theme(Theme::from_name(&config.tui.theme));
        let mut app = DashboardApp::new(backend, config.api.schema).with_query(query);
        crate::tui::run_dashboard(&mut app, config.tui.tick_rate(), true)
            .context("dashboard terminal error")?;
        return Ok(crate::pipeline::exit_codes::SUCCESS);
    }

    let mut orchestrator = Orchestrator::new(backend, config.api.schema);
    let state = orchestrator.search(&query)?;
    if !quiet {
        tracing::info!("Rendered {}: {}", path.display(), state.name());
    }

    let metadata = ReportMetadata::new(None, Some(query));
    super::report_state(state, config, format, &metadata, min_score, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::exit_codes;
    use crate::reports::ReportFormat;

    fn config_writing_to(dir: &Path, format: ReportFormat) -> AppConfig {
        AppConfig::builder()
            .output_format(format)
            .output_file(Some(dir.join("report.out")))
            .no_color(true)
            .build()
    }

    #[test]
    fn test_render_grid_file_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("response.json");
        std::fs::write(
            &input,
            r#"{"data": {"company_name": "Acme", "chatgpt_scores": {"cidr": {"score": 90}}}}"#,
        )
        .unwrap();

        let config = config_writing_to(dir.path(), ReportFormat::Json);
        let code = run_render(&config, &input, None, true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(dir.path().join("report.out")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed["result"]["header"]["title"], "Analysis Results for Acme");
    }

    #[test]
    fn test_render_below_min_score() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("response.json");
        std::fs::write(&input, r#"{"chatgpt_scores": {"cidr": {"score": 90}}}"#).unwrap();

        let config = config_writing_to(dir.path(), ReportFormat::Summary);
        let code = run_render(&config, &input, Some(50.0), true).unwrap();
        assert_eq!(code, exit_codes::BELOW_THRESHOLD);
    }

    #[test]
    fn test_render_missing_file_fails_request() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_writing_to(dir.path(), ReportFormat::Summary);
        let code = run_render(&config, &dir.path().join("absent.json"), None, true).unwrap();
        assert_eq!(code, exit_codes::REQUEST_FAILED);
    }
}
