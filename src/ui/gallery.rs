//! Card list (portrait) and card grid (landscape).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::truncate_to_width;
use super::layout::CARD_HEIGHT;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DIMENSIONS};
use crate::app::App;
use crate::domain::GridGeometry;
use crate::models::Gif;

/// Draw the visible slice of the gallery into `area`.
///
/// `geometry` must describe the frame being drawn, which can differ from
/// `app.layout` until the resize event is handled.
pub fn render_cards(frame: &mut Frame, area: Rect, app: &App, geometry: GridGeometry) {
    let range = app.scroll.visible_range(app.gallery.len(), geometry);

    let columns = geometry.columns as u16;
    let card_width = area.width / columns;

    for (slot, index) in range.enumerate() {
        let Some(gif) = app.gallery.get(index) else {
            break;
        };
        let row = (slot / geometry.columns) as u16;
        let col = (slot % geometry.columns) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        // Last column absorbs the remainder
        let width = if col + 1 == columns {
            area.width - card_width * col
        } else {
            card_width
        };
        let rect = Rect::new(area.x + col * card_width, y, width, CARD_HEIGHT);
        render_card(frame, rect, gif, index, index == app.scroll.selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, gif: &Gif, index: usize, selected: bool) {
    let (border_style, border_type) = if selected {
        (Style::default().fg(COLOR_ACCENT), BorderType::Thick)
    } else {
        (Style::default().fg(COLOR_BORDER), BorderType::Rounded)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(format!(" {} ", index + 1));

    let inner_width = area.width.saturating_sub(2) as usize;
    let id_style = if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(truncate_to_width(&gif.id, inner_width), id_style)),
        Line::from(Span::styled(
            truncate_to_width(&format!("{}×{}", gif.width(), gif.height()), inner_width),
            Style::default().fg(COLOR_DIMENSIONS),
        )),
        Line::from(Span::styled(
            truncate_to_width(gif.url(), inner_width),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
