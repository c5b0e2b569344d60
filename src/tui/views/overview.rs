//! Overview tab: header card, overall gauge and the two average charts.

use super::truncate;
use crate::presentation::{ChartRecord, GridView, SubjectCard};
use crate::tui::theme::{band_badge, colors};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Wrap},
};

pub(crate) fn render_overview(frame: &mut Frame, area: Rect, view: &GridView) {
    let header_height = if view.header.insights.is_some() { 6 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(area);

    render_header(frame, chunks[0], view);
    render_overall(frame, chunks[1], view);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    render_chart(
        frame,
        charts[0],
        " Platform Averages ",
        &view.platform_chart,
        &view.platform_cards,
    );
    render_chart(
        frame,
        charts[1],
        " Methodology Averages ",
        &view.methodology_chart,
        &view.methodology_cards,
    );
}

fn render_header(frame: &mut Frame, area: Rect, view: &GridView) {
    let scheme = colors();
    let mut lines = vec![
        Line::styled(
            view.header.title.clone(),
            Style::default().fg(scheme.primary).bold(),
        ),
        Line::styled(
            view.header.description.clone(),
            Style::default().fg(scheme.text_muted),
        ),
    ];
    if let Some(insights) = &view.header.insights {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            insights.clone(),
            Style::default().fg(scheme.text),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_overall(frame: &mut Frame, area: Rect, view: &GridView) {
    let scheme = colors();
    let badge = &view.overall;
    let gauge_color = scheme.band_color(badge.band);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Overall Visibility ")
                .title(band_badge(badge.band).into_right_aligned_line())
                .title_style(Style::default().bold().fg(scheme.text))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(gauge_color)),
        )
        .gauge_style(Style::default().fg(gauge_color).bg(scheme.muted))
        .percent(badge.progress())
        .label(format!("{}/100 - {}", badge.display, badge.label));
    frame.render_widget(gauge, area);
}

/// Bar chart of averages; bars take the color of the matching card's band.
fn render_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    records: &[ChartRecord],
    cards: &[SubjectCard],
) {
    let scheme = colors();
    let bars: Vec<Bar> = records
        .iter()
        .zip(cards)
        .map(|(record, card)| {
            Bar::default()
                .value(u64::try_from(record.score).unwrap_or(0))
                .text_value(record.score.to_string())
                .label(Line::from(truncate(record.name, 7)))
                .style(Style::default().fg(scheme.band_color(card.badge.band)))
        })
        .collect();

    let bar_chart = BarChart::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .bar_width(7)
        .bar_gap(1)
        .max(100)
        .value_style(Style::default().fg(scheme.badge_fg).bold())
        .label_style(Style::default().fg(scheme.text))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(bar_chart, area);
}
