//! Event handling for the dashboard.
//!
//! Terminal input is polled with a tick timeout. Analysis requests run on
//! worker threads and report back through a channel owned by the
//! [`EventHandler`], tagged with the request id they were issued under.

use crate::client::AnalysisBackend;
use crate::error::Result as AnalysisResult;
use crate::session::{RequestId, Ticket};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::Value;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use super::app::DashboardApp;
use super::toggle_theme;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick (for animations)
    Tick,
    /// Resize event
    Resize(u16, u16),
    /// A backend request finished
    Completed {
        id: RequestId,
        outcome: AnalysisResult<Value>,
    },
}

/// Event handler
pub struct EventHandler {
    /// Tick rate
    tick_rate: Duration,
    sender: Sender<Event>,
    receiver: Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            tick_rate,
            sender,
            receiver,
        }
    }

    /// Sender for worker threads.
    #[must_use]
    pub fn sender(&self) -> Sender<Event> {
        self.sender.clone()
    }

    /// Next event: a pending completion first, then terminal input, else a tick.
    pub fn next(&self) -> std::io::Result<Event> {
        if let Ok(completed) = self.receiver.try_recv() {
            return Ok(completed);
        }
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Run one request on a worker thread and post its completion.
pub fn spawn_request(backend: Arc<dyn AnalysisBackend>, ticket: Ticket, sender: Sender<Event>) {
    std::thread::spawn(move || {
        let outcome = backend.analyze(&ticket.query);
        // The receiver is gone only when the dashboard has already exited.
        let _ = sender.send(Event::Completed {
            id: ticket.id,
            outcome,
        });
    });
}

/// Handle a key press.
///
/// Returns a [`Ticket`] when the key submitted a query that should be sent.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) -> Option<Ticket> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c' | 'q') => app.should_quit = true,
            KeyCode::Char('t') => {
                let name = toggle_theme();
                app.set_status(format!("Theme: {name}"));
            }
            KeyCode::Char('u') => app.clear_input(),
            KeyCode::Char('r') => app.reset(),
            _ => {}
        }
        return None;
    }

    app.clear_status();
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => return app.submit(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResultSchema;
    use crate::session::SearchState;

    struct Unreachable;

    impl AnalysisBackend for Unreachable {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        fn analyze(&self, _query: &str) -> AnalysisResult<Value> {
            Err(crate::error::VisibilityError::malformed("not expected"))
        }
    }

    fn new_app() -> DashboardApp {
        DashboardApp::new(Arc::new(Unreachable), ResultSchema::Grid)
    }

    fn press(app: &mut DashboardApp, code: KeyCode) -> Option<Ticket> {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_then_enter_submits() {
        let mut app = new_app();
        for c in "acme".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let ticket = press(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(ticket.query, "acme");
        assert!(matches!(app.session().state(), SearchState::Loading { .. }));
    }

    #[test]
    fn test_enter_on_empty_input_does_not_submit() {
        let mut app = new_app();
        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert_eq!(app.session().message(), Some("Please enter a URL"));
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_worker_posts_completion() {
        let handler = EventHandler::new(Duration::from_millis(1));
        let ticket = Ticket {
            id: 7,
            query: "acme".to_string(),
        };
        spawn_request(Arc::new(Unreachable), ticket, handler.sender());
        let event = handler
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        assert!(matches!(event, Event::Completed { id: 7, outcome: Err(_) }));
    }
}
