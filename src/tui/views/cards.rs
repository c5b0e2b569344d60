//! "By Platform" / "By Methodology" tabs: one card per subject with a gauge
//! per dimension.

use crate::presentation::{DimensionRow, ScoreBadge, SubjectCard};
use crate::tui::theme::{band_badge, colors};
use crate::tui::widgets::score_gauge;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const LABEL_WIDTH: u16 = 13;
const GAUGE_WIDTH: u16 = 28;

/// Rows a card needs: borders, the description line and one per dimension.
fn card_height(card: &SubjectCard) -> u16 {
    u16::try_from(card.rows.len()).unwrap_or(u16::MAX).saturating_add(3)
}

/// Render cards top to bottom, starting at the card index `scroll`.
pub(crate) fn render_cards(frame: &mut Frame, area: Rect, cards: &[SubjectCard], scroll: u16) {
    if cards.is_empty() {
        return;
    }
    let first = usize::from(scroll).min(cards.len() - 1);
    let mut y = area.y;
    let bottom = area.y + area.height;

    for card in &cards[first..] {
        let height = card_height(card);
        if y + height > bottom {
            break;
        }
        render_card(frame, Rect::new(area.x, y, area.width, height), card);
        y += height;
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &SubjectCard) {
    let scheme = colors();
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", card.name),
                Style::default().fg(scheme.primary).bold(),
            ),
            band_badge(card.badge.band),
        ]))
        .title(
            Line::styled(
                format!(" Avg {} ", card.badge.display),
                Style::default().fg(scheme.band_color(card.badge.band)).bold(),
            )
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::styled(
            card.description,
            Style::default().fg(scheme.text_muted).italic(),
        )),
        Rect { height: 1, ..inner },
    );

    for (i, row) in card.rows.iter().enumerate() {
        let offset = u16::try_from(i + 1).unwrap_or(u16::MAX);
        if offset >= inner.height {
            break;
        }
        render_row(
            frame,
            Rect {
                y: inner.y + offset,
                height: 1,
                ..inner
            },
            row,
        );
    }
}

fn render_row(frame: &mut Frame, area: Rect, row: &DimensionRow) {
    let scheme = colors();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Length(GAUGE_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(row.label, Style::default().fg(scheme.text))),
        columns[0],
    );
    frame.render_widget(score_gauge(&ScoreBadge::new(row.score)), columns[1]);
    if let Some(comment) = &row.comment {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {comment}"),
                Style::default().fg(scheme.text_muted),
            )),
            columns[2],
        );
    }
}
