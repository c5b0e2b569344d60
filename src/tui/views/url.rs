//! URL-analysis and unrecognized-result views.

use crate::presentation::{UnrecognizedView, UrlView};
use crate::tui::theme::{band_badge, colors, Styles};
use crate::tui::widgets::render_message;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 28;

pub(crate) fn render_url(frame: &mut Frame, area: Rect, view: &UrlView, scroll: u16) {
    let scheme = colors();
    let interpretation_height = if view.interpretation.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(interpretation_height),
            Constraint::Min(3),
        ])
        .split(area);

    let title = view
        .url
        .as_deref()
        .map_or_else(|| " URL Analysis ".to_string(), |url| format!(" URL Analysis for {url} "));
    let badge = &view.overall;
    let gauge_color = scheme.band_color(badge.band);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .title(band_badge(badge.band).into_right_aligned_line())
                .title_style(Style::default().bold().fg(scheme.text))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(gauge_color)),
        )
        .gauge_style(Style::default().fg(gauge_color).bg(scheme.muted))
        .percent(badge.progress())
        .label(format!("Overall {}/100 - {}", badge.display, badge.label));
    frame.render_widget(gauge, chunks[0]);

    if let Some(interpretation) = &view.interpretation {
        frame.render_widget(
            Paragraph::new(interpretation.clone())
                .style(Styles::text())
                .block(
                    Block::default()
                        .title(" Interpretation ")
                        .borders(Borders::ALL)
                        .border_style(Styles::border()),
                )
                .wrap(Wrap { trim: true }),
            chunks[1],
        );
    }

    let mut lines = Vec::new();
    for category in &view.categories {
        let filled = usize::from(category.progress) * BAR_WIDTH / 100;
        let color = scheme.band_color(category.badge.band);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<LABEL_WIDTH$}", category.label),
                Style::default().fg(scheme.text).bold(),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "░".repeat(BAR_WIDTH - filled),
                Style::default().fg(scheme.muted),
            ),
            Span::styled(
                format!(" {:>3} ", category.badge.display),
                Style::default().fg(color).bold(),
            ),
            band_badge(category.badge.band),
        ]));
        for finding in &category.findings {
            lines.push(Line::styled(
                format!("  • {finding}"),
                Style::default().fg(scheme.text_muted),
            ));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Categories ")
                    .borders(Borders::ALL)
                    .border_style(Styles::border()),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        chunks[2],
    );
}

pub(crate) fn render_unrecognized(frame: &mut Frame, area: Rect, view: &UnrecognizedView) {
    let scheme = colors();
    let mut lines = vec![
        Line::styled("Unrecognized Result", Style::default().fg(scheme.warning).bold()),
        Line::from(""),
        Line::styled(view.message.clone(), Styles::text()),
    ];
    if !view.keys.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Fields present: {}", view.keys.join(", ")),
            Styles::text_muted(),
        ));
    }
    render_message(frame, area, lines);
}
