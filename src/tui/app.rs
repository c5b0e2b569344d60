//! Dashboard application state.

use crate::client::AnalysisBackend;
use crate::error::Result;
use crate::model::ResultSchema;
use crate::session::{Completion, RequestId, SearchState, Session, Ticket};
use serde_json::Value;
use std::sync::Arc;

/// Result tabs for a grid analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    ByPlatform,
    ByMethodology,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::ByPlatform, Self::ByMethodology];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::ByPlatform => "By Platform",
            Self::ByMethodology => "By Methodology",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::ByPlatform => 1,
            Self::ByMethodology => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::ByPlatform,
            Self::ByPlatform => Self::ByMethodology,
            Self::ByMethodology => Self::Overview,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Overview => Self::ByMethodology,
            Self::ByPlatform => Self::Overview,
            Self::ByMethodology => Self::ByPlatform,
        }
    }
}

/// Interactive dashboard: one search box over a [`Session`].
pub struct DashboardApp {
    backend: Arc<dyn AnalysisBackend>,
    session: Session,
    input: String,
    pub(crate) tab: DashboardTab,
    pub(crate) scroll: u16,
    pub(crate) should_quit: bool,
    /// Animation counter, advanced on every tick
    pub(crate) tick: u64,
    status: Option<String>,
}

impl DashboardApp {
    pub fn new(backend: Arc<dyn AnalysisBackend>, schema: ResultSchema) -> Self {
        Self {
            backend,
            session: Session::new(schema),
            input: String::new(),
            tab: DashboardTab::default(),
            scroll: 0,
            should_quit: false,
            tick: 0,
            status: None,
        }
    }

    /// Pre-fill the search box.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.input = query.into();
        self
    }

    #[must_use]
    pub fn backend(&self) -> Arc<dyn AnalysisBackend> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn tab(&self) -> DashboardTab {
        self.tab
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub(crate) fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub(crate) fn pop_char(&mut self) {
        self.input.pop();
    }

    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the search box.
    ///
    /// Ignored while a request is in flight. Returns the ticket to send when
    /// the input is accepted.
    pub fn submit(&mut self) -> Option<Ticket> {
        if self.session.is_loading() {
            return None;
        }
        let ticket = self.session.begin(&self.input).ok()?;
        self.tab = DashboardTab::Overview;
        self.scroll = 0;
        Some(ticket)
    }

    /// Apply a finished request.
    pub fn complete(&mut self, id: RequestId, outcome: Result<Value>) -> Completion {
        let completion = self.session.complete(id, outcome);
        if completion == Completion::Applied {
            self.scroll = 0;
        }
        completion
    }

    /// Clear the result and any message.
    pub(crate) fn reset(&mut self) {
        self.session.reset();
        self.tab = DashboardTab::Overview;
        self.scroll = 0;
    }

    /// Whether the result tabs apply to the current state.
    #[must_use]
    pub fn has_grid(&self) -> bool {
        matches!(
            self.session.state().view(),
            Some(crate::presentation::ResultView::Grid(_))
        )
    }

    pub(crate) fn next_tab(&mut self) {
        if self.has_grid() {
            self.tab = self.tab.next();
            self.scroll = 0;
        }
    }

    pub(crate) fn prev_tab(&mut self) {
        if self.has_grid() {
            self.tab = self.tab.prev();
            self.scroll = 0;
        }
    }

    pub(crate) fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub(crate) fn scroll_down(&mut self, amount: u16) {
        if matches!(self.session.state(), SearchState::Success { .. }) {
            self.scroll = self.scroll.saturating_add(amount);
        }
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }
}
