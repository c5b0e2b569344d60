//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: one request against the analysis
//! service, rendered as a report.

use crate::client::AnalysisBackend;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, http_backend};
use crate::reports::{ReportFormat, ReportMetadata};
use crate::session::Orchestrator;
use anyhow::Result;
use std::sync::Arc;

/// Run the analyze command, returning the desired exit code.
///
/// When the output format resolves to the interactive dashboard, the query
/// is handed to the dashboard instead of being reported here.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(
    config: &AppConfig,
    query: &str,
    min_score: Option<f64>,
    quiet: bool,
) -> Result<i32> {
    let format = super::resolve_format(config);
    if format == ReportFormat::Tui {
        return super::run_dashboard(config, Some(query.to_string()));
    }

    let backend = http_backend(&config.api)?;
    analyze_with(config, backend, format, query, min_score, quiet)
}

fn analyze_with(
    config: &AppConfig,
    backend: Arc<dyn AnalysisBackend>,
    format: ReportFormat,
    query: &str,
    min_score: Option<f64>,
    quiet: bool,
) -> Result<i32> {
    let source = config.api.endpoint();
    let mut orchestrator = Orchestrator::new(backend, config.api.schema);

    let state = match orchestrator.search(query) {
        Ok(state) => state,
        Err(err) if err.is_validation() => {
            eprintln!("{}", err.user_message());
            return Ok(exit_codes::ERROR);
        }
        Err(err) => return Err(err.into()),
    };
    if !quiet {
        tracing::info!("Request finished: {}", state.name());
    }

    let metadata = ReportMetadata::new(Some(query.trim().to_string()), Some(source));
    super::report_state(state, config, format, &metadata, min_score, quiet)
}
