//! Remote API access.

mod giphy;

pub use giphy::{FetchResult, GiphyClient};
