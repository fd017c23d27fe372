//! Persisted gallery state.

use serde::{Deserialize, Serialize};

use super::Gif;

/// What survives a restart: the accumulated items and the next cursor.
///
/// `data` uses the same shape as the remote page envelope, so a snapshot
/// file doubles as a valid `{ "data": [...] }` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySnapshot {
    pub data: Vec<Gif>,
    #[serde(default)]
    pub offset: u32,
}
