//! `HttpClient` backed by reqwest with rustls.

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Sent on every request so Giphy can tell us apart from browsers.
const USER_AGENT: &str = concat!("giftrend/", env!("CARGO_PKG_VERSION"));

/// Production transport for [`crate::api::GiphyClient`].
///
/// Library default timeouts apply and nothing is retried.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Map a reqwest failure onto the transport error kinds the UI reports.
    fn classify(err: reqwest::Error) -> HttpError {
        let detail = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(detail)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(detail)
        } else if err.is_builder() {
            HttpError::InvalidUrl(detail)
        } else if err.is_body() || err.is_decode() {
            HttpError::Io(detail)
        } else {
            HttpError::Other(detail)
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |req, (name, value)| req.header(name, value));

        let response = request.send().await.map_err(Self::classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::classify)?;

        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("giftrend/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_relative_url_is_rejected() {
        let client = ReqwestHttpClient::new();
        let result = client.get("v1/gifs/trending", &Headers::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = ReqwestHttpClient::default();
        // Port unlikely to be bound
        let result = client
            .get("http://127.0.0.1:59999/v1/gifs/trending", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }
}
