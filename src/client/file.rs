//! Offline backend that replays a saved response.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::traits::AnalysisBackend;
use crate::error::{ErrorContext, Result, VisibilityError};
use crate::scoring::unwrap_envelope;

/// Backend that answers every query with the contents of one JSON file.
///
/// Used by `render` to push a saved response through the same pipeline as a
/// live request.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    unwrap_envelope: bool,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>, unwrap_envelope: bool) -> Self {
        Self {
            path: path.into(),
            unwrap_envelope,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalysisBackend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    fn analyze(&self, _query: &str) -> Result<Value> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| VisibilityError::io(&self.path, e))?;
        let raw: Value = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "Loaded saved response");
        Ok(if self.unwrap_envelope {
            unwrap_envelope(raw)
        } else {
            raw
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_replays_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data": {{"url": "https://example.com"}}}}"#).unwrap();

        let backend = FileBackend::new(file.path(), true);
        let raw = backend.analyze("ignored").unwrap();
        assert_eq!(raw["url"], "https://example.com");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let backend = FileBackend::new("/nonexistent/response.json", true);
        let err = backend.analyze("x").unwrap_err();
        assert!(matches!(err, VisibilityError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = FileBackend::new(file.path(), false)
            .analyze("x")
            .unwrap_err();
        assert!(matches!(err, VisibilityError::MalformedResult(_)));
    }
}
