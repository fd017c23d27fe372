//! UI rendering for the trending gallery
//!
//! The screen is a one-row header, the content area and a one-row footer.
//! What fills the content area is decided by the gallery's load status:
//!
//! | Status  | Items | Content                         |
//! |---------|-------|---------------------------------|
//! | Loading | none  | centered spinner                |
//! | Loading | some  | cards, spinner in the footer    |
//! | Loaded  | none  | "no trending GIFs", press r     |
//! | Loaded  | some  | cards                           |
//! | Failed  | any   | failure card with retry prompt  |
//!
//! Cards are laid out as a list or a grid depending on [`LayoutContext`].

mod chrome;
mod gallery;
mod helpers;
mod layout;
mod status;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_DIMENSIONS, COLOR_ERROR,
    COLOR_HEADER,
};

// Re-export layout system for external use
pub use layout::{
    LayoutContext, Orientation, CARD_HEIGHT, FOOTER_HEIGHT, GRID_COLUMNS, HEADER_HEIGHT,
};

pub use helpers::{spinner_frame, truncate_to_width, SPINNER_FRAMES};

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::state::LoadStatus;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    let header = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT.min(area.height));
    let content_y = area.y + header.height;
    let footer_height = FOOTER_HEIGHT.min(area.height - header.height);
    let footer = Rect::new(
        area.x,
        area.y + area.height - footer_height,
        area.width,
        footer_height,
    );
    let content = Rect::new(
        area.x,
        content_y,
        area.width,
        area.height - header.height - footer_height,
    );

    // Geometry follows the frame actually being drawn
    let frame_layout = LayoutContext::new(area.width, area.height);
    chrome::render_header(frame, header, app, frame_layout.orientation());

    match app.gallery.status() {
        LoadStatus::Failed(message) => status::render_failure(frame, content, message),
        LoadStatus::Loading if app.gallery.is_empty() => {
            status::render_loading(frame, content, app.tick_count)
        }
        LoadStatus::Loaded if app.gallery.is_empty() => status::render_empty(frame, content),
        _ => gallery::render_cards(frame, content, app, frame_layout.grid_geometry()),
    }

    if footer.height > 0 {
        chrome::render_footer(frame, footer, app);
    }
}
