//! Dashboard run loop and top-level rendering.

use super::app::{DashboardApp, DashboardTab};
use super::events::{handle_key_event, spawn_request, Event, EventHandler};
use super::theme::{colors, current_theme_name, footer_hints, Styles};
use super::views;
use super::widgets::{
    check_terminal_size, render_message, render_size_warning, spinner, MIN_HEIGHT, MIN_WIDTH,
};
use crate::presentation::ResultView;
use crate::session::SearchState;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};
use std::io::{self, stdout};
use std::time::Duration;

/// Text shown before the first search.
pub const EMPTY_STATE_MESSAGE: &str = "Enter a company name or URL and press Enter to get started";

/// Run the dashboard until the user quits.
///
/// When `submit_initial` is set, the pre-filled query is submitted before the
/// first frame.
pub fn run_dashboard(
    app: &mut DashboardApp,
    tick_rate: Duration,
    submit_initial: bool,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);
    if submit_initial {
        if let Some(ticket) = app.submit() {
            spawn_request(app.backend(), ticket, events.sender());
        }
    }

    let result = event_loop(&mut terminal, app, &events);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DashboardApp,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => {
                if let Some(ticket) = handle_key_event(app, key) {
                    spawn_request(app.backend(), ticket, events.sender());
                }
            }
            Event::Resize(_, _) => {}
            Event::Tick => {
                app.tick = app.tick.wrapping_add(1);
            }
            Event::Completed { id, outcome } => {
                app.complete(id, outcome);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
pub fn render(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let message_height = if app.session().message().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(message_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_search(frame, chunks[1], app);
    if let Some(message) = app.session().message() {
        render_error(frame, chunks[2], message);
    }
    render_body(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let title = Line::from(vec![
        Span::styled(" AI Visibility ", Styles::header_title()),
        Span::styled("Dashboard", Style::default().fg(scheme.text)),
    ]);
    let theme = Line::styled(
        format!("theme: {} ", current_theme_name()),
        Styles::text_muted(),
    )
    .right_aligned();
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(scheme.background_alt)),
        area,
    );
    frame.render_widget(Paragraph::new(theme), area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    let loading = app.session().is_loading();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(18)])
        .split(area);

    let mut spans = vec![Span::styled(app.input().to_string(), Styles::text())];
    if !loading {
        spans.push(Span::styled("▏", Style::default().fg(scheme.accent)));
    }
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Company or URL ")
            .borders(Borders::ALL)
            .border_style(if loading {
                Styles::border()
            } else {
                Styles::border_focused()
            }),
    );
    frame.render_widget(input, columns[0]);

    let button = if loading {
        Line::from(vec![
            Span::styled(spinner(app.tick), Style::default().fg(scheme.accent)),
            Span::styled(" Analyzing...", Style::default().fg(scheme.accent)),
        ])
    } else {
        Line::from(vec![
            Span::styled("Enter", Styles::shortcut_key().bold()),
            Span::styled(" Analyze", Styles::text()),
        ])
    };
    frame.render_widget(
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border()),
            ),
        columns[1],
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let scheme = colors();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("✗ ", Style::default().fg(scheme.error).bold()),
            Span::styled(message.to_string(), Style::default().fg(scheme.text)),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Styles::error())
                .style(Style::default().bg(scheme.error_bg)),
        ),
        area,
    );
}

fn render_body(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    match app.session().state() {
        SearchState::Idle => render_message(
            frame,
            area,
            vec![Line::styled(EMPTY_STATE_MESSAGE, Styles::text_muted())],
        ),
        SearchState::Loading { query, .. } => render_message(
            frame,
            area,
            vec![
                Line::styled(
                    format!("{} Analyzing {query}", spinner(app.tick)),
                    Style::default().fg(scheme.accent).bold(),
                ),
                Line::styled("This can take a little while", Styles::text_muted()),
            ],
        ),
        SearchState::Failed { .. } => render_message(
            frame,
            area,
            vec![Line::styled(
                "Fix the query and press Enter to try again",
                Styles::text_muted(),
            )],
        ),
        SearchState::Success { view, .. } => match view.as_ref() {
            ResultView::Grid(grid) => render_grid(frame, area, app, grid),
            ResultView::Url(url) => views::render_url(frame, area, url, app.scroll),
            ResultView::Unrecognized(unrecognized) => {
                views::render_unrecognized(frame, area, unrecognized);
            }
        },
    }
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    app: &DashboardApp,
    grid: &crate::presentation::GridView,
) {
    let scheme = colors();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = DashboardTab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab().index())
        .style(Style::default().fg(scheme.text_muted))
        .highlight_style(Style::default().fg(scheme.primary).bold().underlined())
        .divider("│");
    frame.render_widget(tabs, chunks[0]);

    match app.tab() {
        DashboardTab::Overview => views::render_overview(frame, chunks[1], grid),
        DashboardTab::ByPlatform => {
            views::render_cards(frame, chunks[1], &grid.platform_cards, app.scroll);
        }
        DashboardTab::ByMethodology => {
            views::render_cards(frame, chunks[1], &grid.methodology_cards, app.scroll);
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let line = match app.status() {
        Some(status) => Line::styled(format!(" {status}"), Styles::text_muted()),
        None => footer_hints(&[
            ("Enter", "analyze"),
            ("Tab", "switch view"),
            ("↑↓", "scroll"),
            ("^T", "theme"),
            ("^U", "clear"),
            ("^R", "reset"),
            ("Esc", "quit"),
        ]),
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors().background_alt)),
        area,
    );
}
