//! Actions that reach outside the app: page requests and the image viewer.

use tracing::{debug, warn};

use super::{App, AppMessage};

impl App {
    /// Request the page at the current cursor, unless one is in flight.
    pub fn request_page(&mut self) {
        if let Some(offset) = self.gallery.begin_load() {
            self.spawn_fetch(offset);
            self.mark_dirty();
        }
    }

    /// Re-issue the failed request. No-op unless the last load failed.
    pub fn retry(&mut self) {
        if let Some(offset) = self.gallery.retry() {
            debug!(offset, "Retrying failed page");
            self.notice = None;
            self.spawn_fetch(offset);
            self.mark_dirty();
        }
    }

    /// Load the next page if the last card is on screen.
    pub fn check_pagination(&mut self) {
        let geometry = self.layout.grid_geometry();
        let Some(last_visible) = self.scroll.last_visible_index(self.gallery.len(), geometry)
        else {
            return;
        };
        if self.gallery.should_paginate(last_visible) {
            debug!(last_visible, cursor = self.gallery.cursor(), "Reached end, paginating");
            self.request_page();
        }
    }

    /// Hand the selected GIF to the image viewer.
    pub fn open_selected(&mut self) {
        let Some(gif) = self.gallery.get(self.scroll.selected) else {
            return;
        };
        match self.viewer.show(gif.url()) {
            Ok(()) => {
                self.notice = Some(format!("Opened {}", gif.id));
            }
            Err(e) => {
                warn!(error = %e, "Image viewer failed");
                self.notice = Some(format!("Could not open {}", gif.id));
            }
        }
        self.mark_dirty();
    }

    fn spawn_fetch(&self, offset: u32) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.request_page(offset).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(AppMessage::PageLoaded { offset, result });
        });
    }
}
