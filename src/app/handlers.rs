//! Input and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::info;

use super::{App, AppMessage};
use crate::state::LoadStatus;

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PageLoaded { offset, result } => {
                let added = self.gallery.apply_result(offset, result);
                self.scroll.clamp(self.gallery.len());
                if let LoadStatus::Failed(message) = self.gallery.status() {
                    info!(offset, message = %message, "Gallery entered failed state");
                } else {
                    info!(offset, added, total = self.gallery.len(), "Gallery updated");
                }
                // A page that added nothing stops the chain; the next user
                // move picks pagination back up.
                if added > 0 {
                    self.check_pagination();
                }
            }
        }
    }

    /// Handle a key press. Release and repeat events are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        // Global keybinds
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if matches!(self.gallery.status(), LoadStatus::Failed(_)) {
            // Only the retry card is on screen
            if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
                self.retry();
            }
            return;
        }

        if self.gallery.needs_initial_load() {
            // Nothing on screen to move over; any navigation or retry key reloads
            if matches!(
                key.code,
                KeyCode::Char('r' | 'j' | 'k' | 'g' | 'G')
                    | KeyCode::Enter
                    | KeyCode::Up
                    | KeyCode::Down
                    | KeyCode::PageUp
                    | KeyCode::PageDown
                    | KeyCode::Home
                    | KeyCode::End
            ) {
                self.request_page();
            }
            return;
        }

        let columns = self.layout.grid_geometry().columns as isize;
        let page = self.layout.grid_geometry().items_per_screen() as isize;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(columns),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-columns),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(page),
            KeyCode::PageUp => self.move_selection(-page),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => {
                self.select(self.gallery.len().saturating_sub(1))
            }
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            _ => {}
        }
    }

    /// Mouse wheel scrolls one row at a time.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(self.gallery.status(), LoadStatus::Failed(_)) {
            return;
        }
        if self.gallery.needs_initial_load() {
            if matches!(mouse.kind, MouseEventKind::ScrollDown | MouseEventKind::ScrollUp) {
                self.request_page();
            }
            return;
        }
        let columns = self.layout.grid_geometry().columns as isize;
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_selection(columns),
            MouseEventKind::ScrollUp => self.move_selection(-columns),
            _ => {}
        }
    }

    /// Move the selection, follow it with the viewport and paginate if the
    /// end came into view.
    pub fn move_selection(&mut self, delta: isize) {
        self.notice = None;
        self.scroll.move_by(delta, self.gallery.len());
        self.scroll.ensure_visible(self.layout.grid_geometry());
        self.check_pagination();
        self.mark_dirty();
    }

    pub fn select(&mut self, index: usize) {
        self.notice = None;
        self.scroll.select(index, self.gallery.len());
        self.scroll.ensure_visible(self.layout.grid_geometry());
        self.check_pagination();
        self.mark_dirty();
    }
}
