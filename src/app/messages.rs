//! AppMessage enum for async communication back to the event loop.

use crate::api::FetchResult;

/// Messages sent from spawned tasks to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A trending page request issued at `offset` finished
    PageLoaded { offset: u32, result: FetchResult },
}
