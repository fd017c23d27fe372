//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use giftrend::adapters::mock::{MockHttpClient, MockResponse, RecordingViewer};
use giftrend::api::GiphyClient;
use giftrend::app::App;
use giftrend::config::GalleryConfig;
use giftrend::models::{Gif, Page};
use giftrend::state::GalleryState;
use giftrend::traits::Response;

pub const TEST_API_KEY: &str = "test-key";

/// Giphy-shaped envelope for the given ids. Dimensions are strings, as Giphy sends them.
pub fn page_json(ids: &[&str]) -> serde_json::Value {
    let data: Vec<_> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "type": "gif",
                "title": format!("{} GIF", id),
                "images": {
                    "original": {
                        "url": format!("https://media.giphy.com/media/{}/giphy.gif", id),
                        "width": "480",
                        "height": "270",
                        "size": "123456"
                    },
                    "fixed_height": { "url": "ignored", "width": "356", "height": "200" }
                }
            })
        })
        .collect();
    serde_json::json!({
        "data": data,
        "pagination": { "total_count": 5000, "count": ids.len(), "offset": 0 },
        "meta": { "status": 200, "msg": "OK" }
    })
}

pub fn page(ids: &[&str]) -> Page {
    Page::new(
        ids.iter()
            .map(|id| Gif::new(*id, format!("https://media.giphy.com/media/{}/giphy.gif", id), 480, 270))
            .collect(),
    )
}

pub fn ok_page(ids: &[&str]) -> MockResponse {
    MockResponse::Success(Response::json_body(&page_json(ids)))
}

pub fn status(code: u16) -> MockResponse {
    MockResponse::Success(Response::new(code, bytes::Bytes::new()))
}

pub fn test_config() -> GalleryConfig {
    GalleryConfig::new(TEST_API_KEY).with_base_url("https://giphy.test")
}

/// App wired to a scripted transport and a recording viewer.
pub fn create_test_app(http: MockHttpClient, viewer: RecordingViewer, gallery: GalleryState) -> App {
    let client = GiphyClient::new(http, &test_config());
    App::new(client, Arc::new(viewer), gallery)
}

/// Wait for the next spawned request to report back and feed it to the app.
pub async fn pump_message(app: &mut App) {
    let rx = app
        .message_rx
        .as_mut()
        .expect("message receiver already taken");
    let msg = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for page result")
        .expect("channel closed");
    app.handle_message(msg);
}

pub fn ids(app: &App) -> Vec<String> {
    app.gallery.items().iter().map(|g| g.id.clone()).collect()
}
