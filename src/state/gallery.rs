//! Gallery state machine.
//!
//! Holds the accumulated GIFs, the pagination cursor and the tri-state load
//! status. Pure: no I/O, no async. The app owns one instance and mutates it
//! only from its event loop.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::api::FetchResult;
use crate::models::{GallerySnapshot, Gif};

/// Load status that governs rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// A page request is in flight
    Loading,
    /// Items (possibly none) are ready to render
    #[default]
    Loaded,
    /// Last request failed; carries the short failure message
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct GalleryState {
    items: Vec<Gif>,
    /// Mirrors `items` by id
    seen: HashSet<String>,
    cursor: u32,
    page_size: u32,
    status: LoadStatus,
}

impl GalleryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            cursor: 0,
            page_size,
            status: LoadStatus::Loaded,
        }
    }

    /// Rebuild from a saved snapshot. Duplicate ids in the snapshot are dropped.
    pub fn restore(snapshot: GallerySnapshot, page_size: u32) -> Self {
        let mut state = Self::new(page_size);
        state.append_unique(snapshot.data);
        state.cursor = snapshot.offset;
        state
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            data: self.items.clone(),
            offset: self.cursor,
        }
    }

    pub fn items(&self) -> &[Gif] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Gif> {
        self.items.get(index)
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Loaded with nothing to show: the screen should kick off the first page.
    pub fn needs_initial_load(&self) -> bool {
        self.status == LoadStatus::Loaded && self.items.is_empty()
    }

    /// Enter `Loading` and return the offset to request.
    ///
    /// Returns `None` while a request is already in flight.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.is_loading() {
            return None;
        }
        self.status = LoadStatus::Loading;
        debug!(offset = self.cursor, "Begin load");
        Some(self.cursor)
    }

    /// Re-issue the failed request at the unchanged cursor.
    pub fn retry(&mut self) -> Option<u32> {
        match self.status {
            LoadStatus::Failed(_) => self.begin_load(),
            _ => None,
        }
    }

    /// Apply a completed request that was issued at `offset`.
    ///
    /// Returns the number of items appended. Results for any offset other
    /// than the current cursor are stale and ignored.
    pub fn apply_result(&mut self, offset: u32, result: FetchResult) -> usize {
        if offset != self.cursor || !self.is_loading() {
            warn!(
                offset,
                cursor = self.cursor,
                status = ?self.status,
                "Ignoring stale page result"
            );
            return 0;
        }

        match result {
            FetchResult::Success(page) => {
                let received = page.len();
                let added = self.append_unique(page.data);
                self.cursor = self.cursor.saturating_add(self.page_size);
                self.status = LoadStatus::Loaded;
                debug!(
                    received,
                    added,
                    cursor = self.cursor,
                    "Page applied"
                );
                added
            }
            FetchResult::Failure(message) => {
                self.status = LoadStatus::Failed(message);
                0
            }
        }
    }

    /// True when the user has scrolled onto the last item and another page
    /// may be requested.
    pub fn should_paginate(&self, last_visible_index: usize) -> bool {
        self.status == LoadStatus::Loaded
            && !self.items.is_empty()
            && last_visible_index == self.items.len() - 1
    }

    fn append_unique(&mut self, gifs: Vec<Gif>) -> usize {
        let before = self.items.len();
        for gif in gifs {
            if self.seen.insert(gif.id.clone()) {
                self.items.push(gif);
            }
        }
        self.items.len() - before
    }
}
