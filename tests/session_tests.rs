//! Request orchestration tests with an in-memory backend.

use ai_visibility::client::AnalysisBackend;
use ai_visibility::error::{Result, VisibilityError, EMPTY_QUERY_MESSAGE};
use ai_visibility::presentation::ResultView;
use ai_visibility::session::{Completion, Orchestrator, SearchState, Session};
use ai_visibility::ResultSchema;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Backend that returns a canned response and records every query.
struct Recording {
    response: Value,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl Recording {
    fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnalysisBackend for Recording {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn analyze(&self, query: &str) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.response.clone())
    }
}

#[test]
fn empty_input_never_reaches_backend() {
    let backend = Recording::new(json!({}));
    let mut orchestrator = Orchestrator::new(backend.clone(), ResultSchema::Grid);

    for input in ["", "   ", "\t\n"] {
        let err = orchestrator.search(input).unwrap_err();
        assert!(err.is_validation());
    }
    assert_eq!(backend.calls(), 0);
    assert!(matches!(orchestrator.session().state(), SearchState::Idle));
    assert_eq!(orchestrator.session().message(), Some(EMPTY_QUERY_MESSAGE));
}

#[test]
fn single_cell_scenario() {
    let backend = Recording::new(json!({"chatgpt_scores": {"cidr": {"score": 90}}}));
    let mut orchestrator = Orchestrator::new(backend.clone(), ResultSchema::Auto);

    let state = orchestrator.search("https://example.com").unwrap();
    let Some(ResultView::Grid(grid)) = state.view() else {
        panic!("expected a grid view");
    };
    let chatgpt = &grid.platform_cards[0];
    assert_eq!(chatgpt.badge.value, 22.5);
    assert_eq!(chatgpt.badge.display, 23);
    assert_eq!(chatgpt.badge.label, "Needs Improvement");

    assert_eq!(backend.calls(), 1);
    assert_eq!(
        backend.queries.lock().unwrap().as_slice(),
        ["https://example.com".to_string()]
    );
}

#[test]
fn validation_notice_clears_on_next_submission() {
    let backend = Recording::new(json!({}));
    let mut orchestrator = Orchestrator::new(backend, ResultSchema::Grid);

    let _ = orchestrator.search(" ");
    assert!(orchestrator.session().notice().is_some());
    orchestrator.search("acme").unwrap();
    assert!(orchestrator.session().notice().is_none());
    assert!(orchestrator.session().message().is_none());
}

#[test]
fn out_of_order_completions_keep_latest() {
    let mut session = Session::new(ResultSchema::Grid);
    let first = session.begin("first").unwrap();
    let second = session.begin("second").unwrap();

    let newer = json!({"company_name": "Second", "claude_scores": {"cidr": {"score": 100}}});
    let older = json!({"company_name": "First"});

    assert_eq!(session.complete(second.id, Ok(newer)), Completion::Applied);
    assert_eq!(session.complete(first.id, Ok(older)), Completion::Stale);

    assert_eq!(session.state().query(), Some("second"));
    let Some(ResultView::Grid(grid)) = session.state().view() else {
        panic!("expected a grid view");
    };
    assert_eq!(grid.header.title, "Analysis Results for Second");
}

#[test]
fn stale_failure_does_not_replace_loading() {
    let mut session = Session::new(ResultSchema::Grid);
    let first = session.begin("first").unwrap();
    let _second = session.begin("second").unwrap();

    let outcome = Err(VisibilityError::server_reported(500, "boom"));
    assert_eq!(session.complete(first.id, outcome), Completion::Stale);
    assert!(session.is_loading());
    assert_eq!(session.state().query(), Some("second"));
}

#[test]
fn new_search_from_failed_state_reenters_loading() {
    let mut session = Session::new(ResultSchema::Grid);
    let first = session.begin("acme").unwrap();
    session.complete(first.id, Err(VisibilityError::server_reported(429, "rate limited")));
    assert_eq!(session.message(), Some("rate limited"));

    session.begin("acme").unwrap();
    assert!(session.is_loading());
    assert!(session.message().is_none());
}
