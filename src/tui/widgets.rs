//! Small reusable widgets for the dashboard.

use super::theme::{colors, Styles};
use crate::presentation::ScoreBadge;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled("Please resize your terminal", Styles::text_muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Spinner glyph for an animation tick.
pub fn spinner(tick: u64) -> &'static str {
    // Truncation is fine: only the remainder matters.
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Borderless one-line gauge colored by band, labelled `<score> <trend>`.
pub fn score_gauge(badge: &ScoreBadge) -> Gauge<'static> {
    let scheme = colors();
    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(scheme.band_color(badge.band))
                .bg(scheme.background_alt),
        )
        .percent(badge.progress())
        .label(Span::styled(
            format!("{} {}", badge.display, badge.trend.symbol()),
            Style::default().fg(scheme.text).bold(),
        ))
}

/// Centered muted message inside a bordered block.
pub fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height.saturating_sub(height) / 2;
    let target = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        target,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(79, 24), Err((MIN_WIDTH, MIN_HEIGHT)));
        assert!(check_terminal_size(120, 10).is_err());
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), spinner(SPINNER_FRAMES.len() as u64));
        assert_ne!(spinner(0), spinner(1));
    }
}
