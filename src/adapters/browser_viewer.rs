//! Image viewer that hands the URL to the system opener.

use crate::traits::{ImageViewer, ViewerError};

/// Opens image URLs with the platform default handler (usually a browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewer;

impl ImageViewer for BrowserViewer {
    fn show(&self, url: &str) -> Result<(), ViewerError> {
        open::that(url).map_err(|e| ViewerError {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
