//! Header and footer bars.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{spinner_frame, truncate_to_width};
use super::layout::Orientation;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::state::LoadStatus;

const KEY_HINTS: &str = "↑↓←→ move · o open · q quit";
const FAILED_HINTS: &str = "r retry · q quit";
const EMPTY_HINTS: &str = "r reload · q quit";

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, orientation: Orientation) {
    let mode = match orientation {
        Orientation::Landscape => "grid",
        Orientation::Portrait => "list",
    };
    let line = Line::from(vec![
        Span::styled(
            "giftrend",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · trending", Style::default().fg(COLOR_HEADER)),
        Span::styled(
            format!(
                "  {} gifs · offset {} · {}",
                app.gallery.len(),
                app.gallery.cursor(),
                mode
            ),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Footer priority: notice, then "loading more", then key hints.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    let line = if let Some(notice) = &app.notice {
        Line::from(Span::styled(
            truncate_to_width(notice, width),
            Style::default().fg(COLOR_ACCENT),
        ))
    } else if app.gallery.is_loading() && !app.gallery.is_empty() {
        Line::from(vec![
            Span::styled(
                spinner_frame(app.tick_count),
                Style::default().fg(COLOR_ACTIVE),
            ),
            Span::styled(" loading more…", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        let hints = match app.gallery.status() {
            LoadStatus::Failed(_) => FAILED_HINTS,
            _ if app.gallery.needs_initial_load() => EMPTY_HINTS,
            _ => KEY_HINTS,
        };
        Line::from(Span::styled(
            truncate_to_width(hints, width),
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
