//! Client for Giphy's trending endpoint.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::GalleryConfig;
use crate::error::ApiError;
use crate::models::Page;
use crate::traits::{Headers, HttpClient};

/// Outcome of one page request as seen by the screen controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Success(Page),
    Failure(String),
}

impl From<Result<Page, ApiError>> for FetchResult {
    fn from(result: Result<Page, ApiError>) -> Self {
        match result {
            Ok(page) => FetchResult::Success(page),
            Err(e) => FetchResult::Failure(e.failure_message()),
        }
    }
}

/// Giphy API client.
///
/// The transport is injected and shared behind an `Arc`, so clones are cheap
/// and can be moved into spawned tasks.
#[derive(Clone)]
pub struct GiphyClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl std::fmt::Debug for GiphyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // api_key is never printed
        f.debug_struct("GiphyClient")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl GiphyClient {
    pub fn new(http: impl HttpClient + 'static, config: &GalleryConfig) -> Self {
        Self {
            http: Arc::new(http),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Full request URL for the page starting at `offset`. The key is
    /// percent-encoded; limit and offset are plain integers.
    pub fn trending_url(&self, offset: u32) -> String {
        format!(
            "{}/v1/gifs/trending?api_key={}&limit={}&offset={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            self.page_size,
            offset
        )
    }

    /// Fetch one page of trending GIFs.
    pub async fn fetch_trending(&self, offset: u32) -> Result<Page, ApiError> {
        let url = self.trending_url(offset);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        debug!(offset, limit = self.page_size, "Requesting trending page");

        let response = self.http.get(&url, &headers).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        let page: Page = response.json()?;
        Ok(page)
    }

    /// Fetch one page and reduce the outcome to a [`FetchResult`].
    pub async fn request_page(&self, offset: u32) -> FetchResult {
        let result = self.fetch_trending(offset).await;
        match &result {
            Ok(page) => info!(offset, count = page.len(), "Loaded trending page"),
            Err(e) => warn!(offset, code = e.error_code(), error = %e, "Trending request failed"),
        }
        result.into()
    }
}
