//! Interactive terminal dashboard using ratatui.
//!
//! A single search box drives a [`Session`](crate::session::Session).
//! Requests run on worker threads; their completions come back through the
//! event loop tagged with a request id, so only the latest one is shown.

mod app;
mod events;
pub mod theme;
mod ui;
mod views;
pub(crate) mod widgets;

pub use app::{DashboardApp, DashboardTab};
pub use events::{handle_key_event, Event, EventHandler};
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Styles, Theme, ThemeKind,
};
pub use ui::{render, run_dashboard, EMPTY_STATE_MESSAGE};
