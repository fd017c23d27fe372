//! Recording image viewer for tests.

use std::sync::{Arc, Mutex};

use crate::traits::{ImageViewer, ViewerError};

/// Records every URL it is asked to show. Can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewer {
    shown: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `show` calls fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl ImageViewer for RecordingViewer {
    fn show(&self, url: &str) -> Result<(), ViewerError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(ViewerError {
                url: url.to_string(),
                message,
            });
        }
        self.shown.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
