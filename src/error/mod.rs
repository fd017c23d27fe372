//! Error types for giftrend.
//!
//! Each concern owns a `thiserror` enum:
//!
//! | Type | Raised by | Surfaced as |
//! |------|-----------|-------------|
//! | [`ApiError`] | `api::GiphyClient` | `FetchResult::Failure` and the retry card |
//! | [`ConfigError`] | `config::GalleryConfig` | startup message, exit 1 |
//! | [`StorageError`] | `storage::SnapshotStore` | logged, never fatal |
//!
//! Process-level plumbing in `main` uses `color_eyre::Result`.

mod api;
mod config;
mod storage;

pub use api::{failure_hint, ApiError};
pub use config::ConfigError;
pub use storage::StorageError;
