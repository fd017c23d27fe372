//! Selection and scroll position over a list or grid of cards.
//!
//! Rows are the scroll unit. In list mode a row holds one card; in grid
//! mode it holds `columns` cards. The selection is an item index and the
//! viewport follows it.

/// Shape of the visible card area, derived from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Cards per row (1 for list mode)
    pub columns: usize,
    /// Rows of cards that fit on screen
    pub visible_rows: usize,
}

impl GridGeometry {
    pub fn new(columns: usize, visible_rows: usize) -> Self {
        Self {
            columns: columns.max(1),
            visible_rows: visible_rows.max(1),
        }
    }

    pub fn items_per_screen(&self) -> usize {
        self.columns * self.visible_rows
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridScroll {
    /// Index of the selected item
    pub selected: usize,
    /// First visible row
    pub first_row: usize,
}

impl GridScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the selection by `delta` items, clamped to `0..len`.
    ///
    /// Returns true if the selection changed.
    pub fn move_by(&mut self, delta: isize, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let max = len - 1;
        let target = if delta.is_negative() {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize).min(max)
        };

        let changed = target != self.selected;
        self.selected = target;
        changed
    }

    /// Jump to `index`, clamped to the last item.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let target = index.min(len - 1);
        let changed = target != self.selected;
        self.selected = target;
        changed
    }

    /// Keep the selection inside `0..len` after the collection changed.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Scroll so the selected row is on screen.
    pub fn ensure_visible(&mut self, geometry: GridGeometry) {
        let row = self.selected / geometry.columns;
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + geometry.visible_rows {
            self.first_row = row + 1 - geometry.visible_rows;
        }
    }

    /// Index range of items drawn on screen.
    pub fn visible_range(&self, len: usize, geometry: GridGeometry) -> std::ops::Range<usize> {
        let start = (self.first_row * geometry.columns).min(len);
        let end = (start + geometry.items_per_screen()).min(len);
        start..end
    }

    /// Index of the last item drawn on screen, if any.
    pub fn last_visible_index(&self, len: usize, geometry: GridGeometry) -> Option<usize> {
        let range = self.visible_range(len, geometry);
        if range.is_empty() {
            None
        } else {
            Some(range.end - 1)
        }
    }
}
