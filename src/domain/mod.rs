//! Domain objects that are independent of rendering.

pub mod scroll;

pub use scroll::{GridGeometry, GridScroll};
