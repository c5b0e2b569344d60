//! Result views for the dashboard body.

mod cards;
mod overview;
mod url;

pub(crate) use cards::render_cards;
pub(crate) use overview::render_overview;
pub(crate) use url::{render_unrecognized, render_url};

/// Truncate a label to at most `max` characters.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max.saturating_sub(1)).chain(['…']).collect()
    }
}
