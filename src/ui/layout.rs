//! Responsive layout.
//!
//! The terminal's shape stands in for device orientation: a wide, short
//! terminal is "landscape" and gets a grid, anything else gets a list.

use crate::domain::GridGeometry;

/// Rows taken by the header bar.
pub const HEADER_HEIGHT: u16 = 1;
/// Rows taken by the footer / key hints.
pub const FOOTER_HEIGHT: u16 = 1;
/// Rows per card: top border, id, dimensions, url, bottom border.
pub const CARD_HEIGHT: u16 = 5;
/// Columns in landscape grid mode.
pub const GRID_COLUMNS: u16 = 4;

/// Minimum width before the grid is considered at all.
const LANDSCAPE_MIN_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Terminal dimensions plus the layout decisions derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Landscape when the terminal is at least 2.5x wider (in cells) than
    /// tall and wide enough for four readable cards.
    pub fn orientation(&self) -> Orientation {
        let wide = self.width as u32 * 2 >= self.height as u32 * 5;
        if wide && self.width >= LANDSCAPE_MIN_WIDTH {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn columns(&self) -> u16 {
        match self.orientation() {
            Orientation::Landscape => GRID_COLUMNS,
            Orientation::Portrait => 1,
        }
    }

    /// Height left for cards after header and footer.
    pub fn content_height(&self) -> u16 {
        self.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
    }

    /// Card rows that fit in the content area, at least one.
    pub fn visible_rows(&self) -> u16 {
        (self.content_height() / CARD_HEIGHT).max(1)
    }

    pub fn grid_geometry(&self) -> GridGeometry {
        GridGeometry::new(self.columns() as usize, self.visible_rows() as usize)
    }
}
