//! Image viewer collaborator.
//!
//! The gallery never decodes GIF bytes itself. Showing the animated image
//! is handed off to whatever the desktop associates with the URL.

/// Error returned when the viewer could not be launched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not open {url}: {message}")]
pub struct ViewerError {
    pub url: String,
    pub message: String,
}

/// Something that can display an image given its URL.
pub trait ImageViewer: Send + Sync {
    fn show(&self, url: &str) -> Result<(), ViewerError>;
}
