//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`BrowserViewer`] - Opens image URLs with the system handler
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses
//! - [`mock::RecordingViewer`] - Records opened URLs

pub mod browser_viewer;
pub mod mock;
pub mod reqwest_http;

pub use browser_viewer::BrowserViewer;
pub use mock::{MockHttpClient, MockResponse, RecordingViewer};
pub use reqwest_http::ReqwestHttpClient;
