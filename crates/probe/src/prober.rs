//! Per-game capability lookups.

use std::future::Future;
use std::pin::Pin;

use platscan_steam_api::{AppId, Client, Platform};

use crate::outcome::{ProbeOutcome, ProbeResult};

/// Boxed future returned by [`CapabilityProber::probe`].
pub type ProbeFuture<'a> = Pin<Box<dyn Future<Output = ProbeOutcome> + Send + 'a>>;

/// Determines whether one game supports the target platform.
///
/// Implementations never fail: every error is folded into
/// [`ProbeOutcome::Failed`]. Using a trait keeps the collector testable
/// with fakes.
pub trait CapabilityProber: Send + Sync {
    fn probe(&self, app_id: AppId) -> ProbeFuture<'_>;
}

/// Prober backed by the Steam store `appdetails` endpoint.
#[derive(Debug, Clone)]
pub struct StoreProber {
    client: Client,
    platform: Platform,
}

impl StoreProber {
    pub fn new(client: Client, platform: Platform) -> Self {
        Self { client, platform }
    }
}

impl CapabilityProber for StoreProber {
    fn probe(&self, app_id: AppId) -> ProbeFuture<'_> {
        Box::pin(async move {
            match self.client.app_details(app_id).await {
                Ok(details) => ProbeOutcome::Resolved(ProbeResult {
                    supported: self.platform.is_supported_by(&details.platforms),
                    label: details.name,
                }),
                Err(e) => ProbeOutcome::Failed(e.into()),
            }
        })
    }
}
