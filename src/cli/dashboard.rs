//! Dashboard command handler.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, http_backend};
use crate::tui::{set_theme, DashboardApp, Theme};
use anyhow::{bail, Context, Result};
use std::io::IsTerminal;

/// Run the interactive dashboard, optionally starting with a query.
pub fn run_dashboard(config: &AppConfig, query: Option<String>) -> Result<i32> {
    if !std::io::stdout().is_terminal() {
        bail!("the dashboard needs an interactive terminal; use `analyze` for reports");
    }

    let backend = http_backend(&config.api)?;
    set_theme(Theme::from_name(&config.tui.theme));

    let submit_initial = query.is_some();
    let mut app = DashboardApp::new(backend, config.api.schema);
    if let Some(query) = query {
        app = app.with_query(query);
    }

    crate::tui::run_dashboard(&mut app, config.tui.tick_rate(), submit_initial)
        .context("dashboard terminal error")?;
    Ok(exit_codes::SUCCESS)
}
