//! Data models shared between the API client, state and storage.

mod gif;
mod snapshot;

pub use gif::{Gif, Images, Page, Rendition};
pub use snapshot::GallerySnapshot;
