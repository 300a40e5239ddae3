//! Concurrent platform probes with fan-out/fan-in collection.
//!
//! Each owned game is checked by its own task; a single collector drains
//! every outcome and sorts display names into a [`Partition`].
//!
//! # Pieces
//!
//! - **Outcome**: what one probe reports: a resolved name + flag, or a failure
//! - **Prober**: the per-game lookup, abstracted behind [`CapabilityProber`]
//! - **Collector**: spawns one task per game and waits for all of them
//! - **Partition**: the supported / unsupported buckets

pub mod collector;
pub mod outcome;
pub mod partition;
pub mod prober;

// Re-export primary types for convenience.
pub use collector::{CollectReport, Collector, ObserveFn};
pub use outcome::{ProbeFailure, ProbeOutcome, ProbeResult};
pub use partition::{Partition, Placement};
pub use prober::{CapabilityProber, ProbeFuture, StoreProber};
