//! Full-screen status panels: initial spinner, failure card, empty gallery.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, spinner_frame};
use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR};
use crate::error::failure_hint;

const FAILURE_CARD_WIDTH: u16 = 56;
const FAILURE_CARD_HEIGHT: u16 = 7;

pub fn render_loading(frame: &mut Frame, area: Rect, tick_count: u64) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick_count), Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" Loading trending GIFs…"),
    ]);
    let rect = centered_rect(area, area.width, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
}

/// The retry card. Input other than retry and quit is ignored while it shows.
pub fn render_failure(frame: &mut Frame, area: Rect, message: &str) {
    let rect = centered_rect(area, FAILURE_CARD_WIDTH, FAILURE_CARD_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(" Error ");

    let mut lines = vec![Line::from(Span::styled(
        format!("Failed: {}", message),
        Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
    ))];
    if let Some(hint) = failure_hint(message) {
        lines.push(Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" to retry"),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

pub fn render_empty(frame: &mut Frame, area: Rect) {
    let rect = centered_rect(area, area.width, 2);
    let lines = vec![
        Line::from(Span::styled(
            "No trending GIFs right now",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to load more"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
