//! Request orchestration: input validation, request ids and completion
//! handling.

use std::sync::Arc;

use serde_json::Value;

use super::state::{RequestId, SearchState};
use crate::client::AnalysisBackend;
use crate::error::{Result, VisibilityError};
use crate::model::ResultSchema;
use crate::scoring::interpret;

/// A validated submission that should be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: RequestId,
    /// Trimmed query as it will be sent
    pub query: String,
}

/// Outcome of delivering a completion to a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The completion belonged to the latest request and was applied
    Applied,
    /// A newer request has been issued; the completion was dropped
    Stale,
}

/// Owner of the current [`SearchState`].
///
/// The state changes only through [`Session::begin`] (start) and
/// [`Session::complete`] (success or failure). Each accepted submission gets
/// a fresh request id, and a completion is applied only if its id is the most
/// recently issued one, so a slow response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct Session {
    state: SearchState,
    last_issued: RequestId,
    notice: Option<String>,
    schema: ResultSchema,
}

impl Session {
    #[must_use]
    pub fn new(schema: ResultSchema) -> Self {
        Self {
            schema,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn schema(&self) -> ResultSchema {
        self.schema
    }

    /// Id of the most recently issued request (0 before the first).
    #[must_use]
    pub const fn last_issued(&self) -> RequestId {
        self.last_issued
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Inline validation message from the last rejected submission.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The message to show the user, if any: a validation notice takes
    /// precedence over a failed request.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.notice().or_else(|| self.state.error())
    }

    /// Validate input and, if it is acceptable, enter Loading.
    ///
    /// Empty or whitespace-only input is rejected with a validation error and
    /// leaves the state untouched.
    pub fn begin(&mut self, input: &str) -> Result<Ticket> {
        let query = input.trim();
        if query.is_empty() {
            let err = VisibilityError::empty_query();
            self.notice = Some(err.user_message());
            tracing::debug!("Rejected empty query");
            return Err(err);
        }

        self.notice = None;
        self.last_issued += 1;
        let id = self.last_issued;
        let previous = std::mem::take(&mut self.state);
        tracing::debug!(request = id, from = previous.name(), "Starting request");
        self.state = previous.started(id, query);

        Ok(Ticket {
            id,
            query: query.to_string(),
        })
    }

    /// Deliver the outcome of a request.
    pub fn complete(&mut self, id: RequestId, outcome: Result<Value>) -> Completion {
        if id != self.last_issued {
            tracing::debug!(
                request = id,
                latest = self.last_issued,
                "Discarding stale response"
            );
            return Completion::Stale;
        }

        let current = std::mem::take(&mut self.state);
        let next = match outcome {
            Ok(raw) => current.succeeded(id, interpret(&raw, self.schema)),
            Err(err) => {
                tracing::debug!(request = id, "Request failed: {}", err);
                current.failed(id, err.user_message())
            }
        };

        match next {
            Ok(state) => {
                tracing::debug!(request = id, to = state.name(), "Request completed");
                self.state = state;
                Completion::Applied
            }
            Err(unchanged) => {
                tracing::debug!(request = id, "Completion does not match the current state");
                self.state = unchanged;
                Completion::Stale
            }
        }
    }

    /// Return to Idle, clearing any result and message.
    pub fn reset(&mut self) {
        self.state = SearchState::Idle;
        self.notice = None;
    }
}

/// Synchronous orchestrator: one backend call per accepted submission.
pub struct Orchestrator {
    backend: Arc<dyn AnalysisBackend>,
    session: Session,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn AnalysisBackend>, schema: ResultSchema) -> Self {
        Self {
            backend,
            session: Session::new(schema),
        }
    }

    /// Shared handle to the backend, for running requests on another thread.
    #[must_use]
    pub fn backend(&self) -> Arc<dyn AnalysisBackend> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Submit input and wait for the result.
    ///
    /// Returns the validation error for empty input; every other failure is
    /// captured in the resulting [`SearchState::Failed`].
    pub fn search(&mut self, input: &str) -> Result<&SearchState> {
        let ticket = self.session.begin(input)?;
        tracing::info!(
            backend = self.backend.name(),
            request = ticket.id,
            "Analyzing {}",
            ticket.query
        );
        let outcome = self.backend.analyze(&ticket.query);
        self.session.complete(ticket.id, outcome);
        Ok(self.session.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_begin_trims_and_counts() {
        let mut session = Session::default();
        let first = session.begin("  https://example.com \n").unwrap();
        assert_eq!(first.query, "https://example.com");
        assert_eq!(first.id, 1);
        let second = session.begin("acme").unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(session.last_issued(), 2);
    }

    #[test]
    fn test_empty_input_keeps_state() {
        let mut session = Session::default();
        let err = session.begin("   ").unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(session.state(), SearchState::Idle));
        assert_eq!(session.message(), Some("Please enter a URL"));
        assert_eq!(session.last_issued(), 0);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut session = Session::new(ResultSchema::Grid);
        let old = session.begin("old").unwrap();
        let new = session.begin("new").unwrap();

        let applied = session.complete(new.id, Ok(json!({"company_name": "New"})));
        assert_eq!(applied, Completion::Applied);

        let stale = session.complete(old.id, Ok(json!({"company_name": "Old"})));
        assert_eq!(stale, Completion::Stale);
        assert_eq!(session.state().query(), Some("new"));
    }

    #[test]
    fn test_duplicate_completion_is_dropped() {
        let mut session = Session::default();
        let ticket = session.begin("x").unwrap();
        assert_eq!(
            session.complete(ticket.id, Err(VisibilityError::malformed("bad"))),
            Completion::Applied
        );
        assert_eq!(
            session.complete(ticket.id, Ok(json!({}))),
            Completion::Stale
        );
        assert!(session.state().error().is_some());
    }

    #[test]
    fn test_new_submission_clears_notice() {
        let mut session = Session::default();
        let _ = session.begin("");
        assert!(session.notice().is_some());
        session.begin("acme").unwrap();
        assert!(session.notice().is_none());
        session.reset();
        assert!(matches!(session.state(), SearchState::Idle));
    }
}
