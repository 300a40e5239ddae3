//! Error types for Steam API calls.

use crate::types::AppId;

/// Errors from the Steam API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("owned games envelope has no response object")]
    MissingResponse,

    #[error("no app details entry for {0}")]
    MissingEntry(AppId),

    #[error("store reported no success for {0}")]
    Unsuccessful(AppId),

    #[error("app details for {0} carry no data")]
    MissingData(AppId),
}
