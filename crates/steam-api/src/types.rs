//! Wire types for the Steam Web API and store API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Steam application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the owned games list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGame {
    pub appid: AppId,
}

/// `GetOwnedGames` envelope (internal).
#[derive(Debug, Deserialize)]
pub(crate) struct OwnedGamesEnvelope {
    pub response: Option<OwnedGamesResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnedGamesResponse {
    /// Absent for private profiles.
    #[serde(default)]
    pub games: Option<Vec<OwnedGame>>,
    #[serde(default)]
    pub game_count: u32,
}

/// Platform support flags from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platforms {
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub mac: bool,
    #[serde(default)]
    pub linux: bool,
}

/// The subset of store app details used for classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub platforms: Platforms,
}

/// Per-app entry of the `appdetails` envelope (internal).
///
/// The envelope itself is a map keyed by the decimal app id.
#[derive(Debug, Deserialize)]
pub(crate) struct AppDetailsEntry {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppDetails>,
}

/// Operating system a game can be checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[default]
    #[serde(alias = "macos")]
    Mac,
    Linux,
}

impl Platform {
    /// Short lowercase name, as used in output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Mac => "mac",
            Self::Linux => "linux",
        }
    }

    /// Returns `true` if the store flags mark this platform as supported.
    pub fn is_supported_by(self, platforms: &Platforms) -> bool {
        match self {
            Self::Windows => platforms.windows,
            Self::Mac => platforms.mac,
            Self::Linux => platforms.linux,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognized platform name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}' (expected windows, mac or linux)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "mac" | "macos" | "osx" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}
