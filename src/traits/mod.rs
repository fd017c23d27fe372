//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the Giphy client
//! - [`ImageViewer`] - External collaborator that displays an image URL

pub mod http;
pub mod viewer;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use viewer::{ImageViewer, ViewerError};
