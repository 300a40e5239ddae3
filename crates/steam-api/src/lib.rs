//! Steam Web API and store API client.
//!
//! Two endpoints are covered:
//!
//! - **Owned games**: `IPlayerService/GetOwnedGames` on the Web API,
//!   authenticated with a static API key.
//! - **App details**: the store's public `appdetails` endpoint, used to
//!   read a game's display name and supported platforms.

pub mod client;
pub mod error;
pub mod types;

pub use client::{Client, ClientConfig};
pub use error::Error;
pub use types::{AppDetails, AppId, OwnedGame, Platform, Platforms, UnknownPlatform};
