//! Application state and logic for the gallery screen.
//!
//! `App` is the single owner of [`GalleryState`]. Network work runs in
//! spawned tasks which report back over an unbounded channel; the event loop
//! in `main` drains that channel and calls [`App::handle_message`], so every
//! state mutation happens on one task.
//!
//! - [`handlers`] - Key, mouse and message handling
//! - [`actions`] - Page requests and opening images

mod actions;
mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::GiphyClient;
use crate::domain::GridScroll;
use crate::state::GalleryState;
use crate::traits::ImageViewer;
use crate::ui::LayoutContext;

/// Main application state.
pub struct App {
    /// Items, cursor and load status
    pub gallery: GalleryState,
    /// Selection and first visible row
    pub scroll: GridScroll,
    /// Current terminal dimensions
    pub layout: LayoutContext,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Dirty flag; cleared by the draw loop
    pub needs_redraw: bool,
    /// Animation tick counter (spinner)
    pub tick_count: u64,
    /// Transient one-line message shown in the footer
    pub notice: Option<String>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    client: GiphyClient,
    viewer: Arc<dyn ImageViewer>,
}

impl App {
    /// Create an app around an existing gallery (fresh or restored).
    pub fn new(
        client: GiphyClient,
        viewer: Arc<dyn ImageViewer>,
        gallery: GalleryState,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            gallery,
            scroll: GridScroll::new(),
            layout: LayoutContext::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            notice: None,
            message_rx: Some(message_rx),
            message_tx,
            client,
            viewer,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Kick off the first page if there is nothing to show yet.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn start(&mut self) {
        if self.gallery.needs_initial_load() {
            self.request_page();
        }
    }

    /// Advance animations. Only dirties the screen while something animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.gallery.is_loading() {
            self.mark_dirty();
        }
    }

    /// Adopt a new terminal size. A larger viewport may expose the last
    /// card, so pagination is re-checked.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.layout = LayoutContext::new(width, height);
        self.scroll.ensure_visible(self.layout.grid_geometry());
        self.check_pagination();
        self.mark_dirty();
    }
}
