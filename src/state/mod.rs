//! State management for the gallery screen.

mod gallery;

pub use gallery::{GalleryState, LoadStatus};
