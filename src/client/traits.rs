//! The seam between the request orchestrator and the analysis service.

use serde_json::Value;

use crate::error::Result;

/// A source of raw analysis results.
///
/// One call to [`AnalysisBackend::analyze`] is one request: implementations
/// never retry. The returned value is the response payload with any envelope
/// already removed; shape interpretation is left to the caller.
///
/// # Example
///
/// ```ignore
/// use ai_visibility::client::{AnalysisBackend, HttpBackend, HttpBackendConfig};
///
/// let backend: Box<dyn AnalysisBackend> =
///     Box::new(HttpBackend::new(HttpBackendConfig::default())?);
/// let raw = backend.analyze("https://example.com")?;
/// ```
pub trait AnalysisBackend: Send + Sync {
    /// Name of this backend for logs (e.g. "http", "file").
    fn name(&self) -> &'static str;

    /// Submit one query and return the raw result payload.
    fn analyze(&self, query: &str) -> Result<Value>;
}
