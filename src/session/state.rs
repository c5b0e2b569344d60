//! Search state and its transitions.

use std::sync::Arc;

use crate::model::AnalysisResult;
use crate::presentation::ResultView;

/// Identifier of one submitted request. Strictly increasing per session.
pub type RequestId = u64;

/// The single current state of a search session.
///
/// Values are replaced, never mutated in place: each transition consumes the
/// old state and returns the next one.
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Loading { request: RequestId, query: String },
    /// The latest request produced a result
    Success {
        request: RequestId,
        query: String,
        result: Arc<AnalysisResult>,
        view: Arc<ResultView>,
    },
    /// The latest request failed
    Failed {
        request: RequestId,
        query: String,
        message: String,
    },
}

impl SearchState {
    /// Enter Loading for a new request. Allowed from every state; any prior
    /// result or error is dropped.
    #[must_use]
    pub fn started(self, request: RequestId, query: impl Into<String>) -> Self {
        Self::Loading {
            request,
            query: query.into(),
        }
    }

    /// Apply a successful completion. Returns `Err(self)` unchanged when the
    /// state is not loading this request.
    pub fn succeeded(self, request: RequestId, result: AnalysisResult) -> Result<Self, Self> {
        match self {
            Self::Loading {
                request: current,
                query,
            } if current == request => {
                let view = ResultView::from_result(&result);
                Ok(Self::Success {
                    request,
                    query,
                    result: Arc::new(result),
                    view: Arc::new(view),
                })
            }
            other => Err(other),
        }
    }

    /// Apply a failed completion. Returns `Err(self)` unchanged when the state
    /// is not loading this request.
    pub fn failed(self, request: RequestId, message: impl Into<String>) -> Result<Self, Self> {
        match self {
            Self::Loading {
                request: current,
                query,
            } if current == request => Ok(Self::Failed {
                request,
                query,
                message: message.into(),
            }),
            other => Err(other),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Query of the current or last request.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { query, .. }
            | Self::Success { query, .. }
            | Self::Failed { query, .. } => Some(query),
        }
    }

    #[must_use]
    pub fn view(&self) -> Option<&ResultView> {
        match self {
            Self::Success { view, .. } => Some(view),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Success { .. } => "success",
            Self::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_requires_matching_request() {
        let state = SearchState::Idle.started(2, "https://example.com");
        let state = state
            .succeeded(1, AnalysisResult::Unrecognized { keys: vec![] })
            .unwrap_err();
        assert!(state.is_loading());

        let state = state.failed(2, "Failed to analyze URL").unwrap();
        assert_eq!(state.error(), Some("Failed to analyze URL"));
        assert_eq!(state.query(), Some("https://example.com"));
    }

    #[test]
    fn test_completion_from_terminal_state_is_rejected() {
        let state = SearchState::Idle.started(1, "a").failed(1, "boom").unwrap();
        let state = state.failed(1, "again").unwrap_err();
        assert_eq!(state.error(), Some("boom"));
    }

    #[test]
    fn test_restart_clears_previous_result() {
        let state = SearchState::Idle
            .started(1, "a")
            .succeeded(1, AnalysisResult::Unrecognized { keys: vec![] })
            .unwrap();
        assert!(state.view().is_some());
        let state = state.started(2, "b");
        assert!(state.view().is_none());
        assert_eq!(state.name(), "loading");
    }
}
