//! Steam API client.
//!
//! Async HTTP client using `reqwest`. The Web API key is passed per call
//! and only ever travels in the query string; transport errors have their
//! URL stripped so the key never reaches logs.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Error;
use crate::types::{AppDetails, AppDetailsEntry, AppId, OwnedGame, OwnedGamesEnvelope};

/// Default Steam Web API base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://api.steampowered.com";

/// Default Steam store API base URL.
pub const DEFAULT_STORE_BASE_URL: &str = "https://store.steampowered.com/api";

/// Client construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub store_base_url: String,
    /// Per-request timeout. `None` leaves the transport default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Steam Web API + store client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_base_url: String,
    store_base_url: String,
}

impl Client {
    /// Creates a client from base URLs and an optional timeout.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            store_base_url: config.store_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Performs a GET request and returns the body on a success status.
    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<Vec<u8>, Error> {
        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?
            .to_vec())
    }

    /// Returns every game owned by `steam_id`.
    ///
    /// A profile whose game list is hidden yields an empty list.
    pub async fn owned_games(
        &self,
        api_key: &str,
        steam_id: &str,
    ) -> Result<Vec<OwnedGame>, Error> {
        let url = format!(
            "{}/IPlayerService/GetOwnedGames/v0001/",
            self.api_base_url
        );
        let params = [
            ("key", api_key),
            ("steamid", steam_id),
            ("format", "json"),
            ("include_appinfo", "True"),
        ];

        let body = self.get(&url, &params).await?;
        let envelope: OwnedGamesEnvelope = serde_json::from_slice(&body)?;
        let response = envelope.response.ok_or(Error::MissingResponse)?;

        match response.games {
            Some(games) => {
                debug!(
                    count = games.len(),
                    reported = response.game_count,
                    "owned games fetched"
                );
                Ok(games)
            }
            None => {
                warn!(steam_id, "owned games list is empty or private");
                Ok(Vec::new())
            }
        }
    }

    /// Returns store details for a single app.
    pub async fn app_details(&self, app_id: AppId) -> Result<AppDetails, Error> {
        let url = format!("{}/appdetails", self.store_base_url);
        let id = app_id.to_string();

        let body = self.get(&url, &[("appids", id.as_str())]).await?;
        let mut envelope: HashMap<String, AppDetailsEntry> = serde_json::from_slice(&body)?;

        let entry = envelope.remove(&id).ok_or(Error::MissingEntry(app_id))?;
        if !entry.success {
            return Err(Error::Unsuccessful(app_id));
        }
        entry.data.ok_or(Error::MissingData(app_id))
    }
}
