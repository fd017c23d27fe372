//! Test doubles for the trait seams.

pub mod http;
pub mod viewer;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use viewer::RecordingViewer;
