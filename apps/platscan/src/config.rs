//! Run configuration.
//!
//! Built once at startup from three layers, lowest priority first:
//! built-in defaults, an optional TOML file, and CLI flags (which carry
//! the `API_KEY` / `STEAM_ID_64` environment fallbacks).

use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use platscan_steam_api::{ClientConfig, Platform};
use serde::Deserialize;

use crate::cli::Cli;

/// Startup configuration errors. All are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY must be set")]
    MissingApiKey,

    #[error("STEAM_ID_64 must be set")]
    MissingSteamId,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings accepted in the TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub platform: Option<Platform>,
    pub max_in_flight: Option<NonZeroUsize>,
    pub output_dir: Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
    pub api_base_url: Option<String>,
    pub store_base_url: Option<String>,
}

impl FileConfig {
    /// Reads and parses a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved configuration for one run.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub steam_id: String,
    pub platform: Platform,
    pub max_in_flight: Option<NonZeroUsize>,
    pub output_dir: PathBuf,
    pub client: ClientConfig,
}

// The API key stays out of debug output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("steam_id", &self.steam_id)
            .field("platform", &self.platform)
            .field("max_in_flight", &self.max_in_flight)
            .field("output_dir", &self.output_dir)
            .field("client", &self.client)
            .finish()
    }
}

impl Config {
    /// Resolves CLI arguments (and the settings file they name).
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    /// Layers CLI values over file values over defaults.
    pub fn merge(cli: Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let api_key = non_blank(cli.api_key).ok_or(ConfigError::MissingApiKey)?;
        let steam_id = non_blank(cli.steam_id).ok_or(ConfigError::MissingSteamId)?;

        let defaults = ClientConfig::default();
        let client = ClientConfig {
            api_base_url: file.api_base_url.unwrap_or(defaults.api_base_url),
            store_base_url: file.store_base_url.unwrap_or(defaults.store_base_url),
            timeout: cli
                .timeout_secs
                .or(file.request_timeout_secs)
                .map(Duration::from_secs),
        };

        Ok(Self {
            api_key,
            steam_id,
            platform: cli.platform.or(file.platform).unwrap_or_default(),
            max_in_flight: cli.max_in_flight.or(file.max_in_flight),
            output_dir: cli
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            client,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
