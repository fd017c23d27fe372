//! Configuration errors.

use thiserror::Error;

/// Problems found while resolving [`crate::config::GalleryConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No API key was supplied.
    #[error("GIFTREND_API_KEY is not set. Get a key at https://developers.giphy.com and export it.")]
    MissingApiKey,

    /// A variable was present but could not be parsed.
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The platform exposes no data directory and no explicit path was given.
    #[error("Could not determine a data directory for giftrend")]
    NoDataDirectory,
}
