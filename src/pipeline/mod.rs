//! Pipeline orchestration for analysis commands.
//!
//! Shared request → interpret → report plumbing for the CLI command handlers.

mod output;
mod report_stage;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::output_report;

use crate::client::{AnalysisBackend, HttpBackend};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::presentation::ResultView;
use std::sync::Arc;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - result obtained (and at or above `--min-score`)
    pub const SUCCESS: i32 = 0;
    /// Headline score below `--min-score`, or no headline score available
    pub const BELOW_THRESHOLD: i32 = 1;
    /// The analysis request failed
    pub const REQUEST_FAILED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Build the live HTTP backend from service settings.
pub fn http_backend(api: &ApiConfig) -> Result<Arc<dyn AnalysisBackend>> {
    let backend = HttpBackend::new(api.backend_config())?;
    tracing::debug!(endpoint = backend.endpoint(), "Using HTTP backend");
    Ok(Arc::new(backend))
}

/// Exit code for a rendered result given an optional minimum score.
#[must_use]
pub fn threshold_exit_code(view: &ResultView, min_score: Option<f64>) -> i32 {
    let Some(min) = min_score else {
        return exit_codes::SUCCESS;
    };
    match view.headline() {
        Some(badge) if badge.value >= min => exit_codes::SUCCESS,
        Some(badge) => {
            tracing::info!(
                "Headline score {} is below the minimum of {}",
                badge.display,
                min
            );
            exit_codes::BELOW_THRESHOLD
        }
        None => exit_codes::BELOW_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResult, UrlAnalysis};

    fn url_view(score: f64) -> ResultView {
        let mut analysis = UrlAnalysis::new();
        analysis.overall.value = score;
        ResultView::from_result(&AnalysisResult::Url(analysis))
    }

    #[test]
    fn test_threshold_exit_code() {
        assert_eq!(threshold_exit_code(&url_view(40.0), None), exit_codes::SUCCESS);
        assert_eq!(
            threshold_exit_code(&url_view(70.0), Some(60.0)),
            exit_codes::SUCCESS
        );
        assert_eq!(
            threshold_exit_code(&url_view(59.5), Some(60.0)),
            exit_codes::BELOW_THRESHOLD
        );
        let unrecognized = ResultView::from_result(&AnalysisResult::Unrecognized { keys: vec![] });
        assert_eq!(
            threshold_exit_code(&unrecognized, Some(10.0)),
            exit_codes::BELOW_THRESHOLD
        );
    }
}
