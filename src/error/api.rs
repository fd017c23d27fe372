//! Errors raised while fetching a trending page.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure modes of a single `/v1/gifs/trending` request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not a valid page envelope.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short text carried by `FetchResult::Failure` and shown on the retry card.
    ///
    /// Status errors collapse to the bare numeric code (`"429"`). Transport
    /// messages never echo the request URL, which embeds the API key.
    pub fn failure_message(&self) -> String {
        match self {
            ApiError::Status { status } => status.to_string(),
            ApiError::Transport(HttpError::ConnectionFailed(_)) => "connection failed".to_string(),
            ApiError::Transport(HttpError::Timeout(_)) => "request timed out".to_string(),
            ApiError::Transport(HttpError::InvalidUrl(_)) => "invalid url".to_string(),
            ApiError::Transport(_) => "network error".to_string(),
            ApiError::Decode(_) => "invalid response".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "E_API_TRANSPORT",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Decode(_) => "E_API_DECODE",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// A longer explanation for a failure message, if one is known.
///
/// Works on the already-reduced message so the UI does not need the
/// original error value.
pub fn failure_hint(message: &str) -> Option<&'static str> {
    let hint = match message.parse::<u16>().ok()? {
        400 => "The request was rejected as invalid.",
        401 | 403 => "The API key was rejected. Check GIFTREND_API_KEY.",
        404 => "The trending endpoint was not found. Check GIFTREND_BASE_URL.",
        429 => "Too many requests. Wait a moment before retrying.",
        500..=599 => "Giphy is having trouble. Try again later.",
        _ => return None,
    };
    Some(hint)
}
