//! Fan-out/fan-in probe collector.
//!
//! Spawns one task per app id, drains their outcomes from a channel in
//! completion order and partitions them. The collector only finalizes
//! after every spawned task is accounted for.

use std::num::NonZeroUsize;
use std::sync::Arc;

use platscan_steam_api::AppId;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, info};

use crate::outcome::{ProbeFailure, ProbeOutcome};
use crate::partition::{Partition, Placement};
use crate::prober::CapabilityProber;

/// Callback invoked once per outcome, in arrival order.
pub type ObserveFn = Box<dyn Fn(AppId, &ProbeOutcome) + Send + Sync + 'static>;

/// Result of one collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectReport {
    pub partition: Partition,
    /// Outcomes seen. Always equals the number of ids submitted.
    pub observed: usize,
    /// Lookups that failed.
    pub failed: usize,
    /// Lookups that resolved with an empty display name.
    pub empty_labels: usize,
}

impl CollectReport {
    fn record(&mut self, app_id: AppId, outcome: &ProbeOutcome) {
        self.observed += 1;

        match self.partition.place(outcome) {
            Placement::Supported | Placement::Unsupported => {}
            Placement::Dropped => match outcome {
                ProbeOutcome::Failed(reason) => {
                    self.failed += 1;
                    debug!(app_id = %app_id, error = %reason, "probe failed");
                }
                ProbeOutcome::Resolved(_) => {
                    self.empty_labels += 1;
                    debug!(app_id = %app_id, "probe resolved without a display name");
                }
            },
        }
    }
}

/// Runs a [`CapabilityProber`] over many app ids concurrently.
pub struct Collector<P> {
    prober: Arc<P>,
    max_in_flight: Option<NonZeroUsize>,
    observe: Option<ObserveFn>,
}

impl<P> Collector<P>
where
    P: CapabilityProber + 'static,
{
    /// Creates a collector with unbounded fan-out.
    pub fn new(prober: P) -> Self {
        Self {
            prober: Arc::new(prober),
            max_in_flight: None,
            observe: None,
        }
    }

    /// Caps how many probes may run at once. `None` means no cap.
    pub fn with_max_in_flight(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.max_in_flight = limit;
        self
    }

    /// Sets a callback invoked for every outcome as it arrives.
    ///
    /// Observation only; it has no effect on the partition.
    pub fn on_outcome(mut self, observe: ObserveFn) -> Self {
        self.observe = Some(observe);
        self
    }

    /// Probes every id and partitions the outcomes.
    ///
    /// Returns only after all spawned probes have finished. A probe that
    /// panics is counted as a failure.
    pub async fn collect(&self, app_ids: &[AppId]) -> CollectReport {
        let mut report = CollectReport::default();
        if app_ids.is_empty() {
            return report;
        }

        let (tx, mut rx) = mpsc::channel::<(AppId, ProbeOutcome)>(app_ids.len());
        let permits = self
            .max_in_flight
            .map(|limit| Arc::new(Semaphore::new(limit.get())));

        let mut handles = Vec::with_capacity(app_ids.len());
        for &app_id in app_ids {
            let prober = Arc::clone(&self.prober);
            let permits = permits.as_ref().map(Arc::clone);
            let tx = tx.clone();

            let handle = tokio::spawn(async move {
                // The semaphore is never closed, so acquisition only waits.
                let _permit = match permits {
                    Some(sem) => sem.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = prober.probe(app_id).await;
                let _ = tx.send((app_id, outcome)).await;
            });
            handles.push((app_id, handle));
        }
        // Only the task clones remain; the channel closes when the last one finishes.
        drop(tx);

        debug!(
            spawned = handles.len(),
            max_in_flight = self.max_in_flight.map(NonZeroUsize::get),
            "probes spawned"
        );

        while let Some((app_id, outcome)) = rx.recv().await {
            self.notify(app_id, &outcome);
            report.record(app_id, &outcome);
        }

        // Tasks that died before sending left no message behind.
        for (app_id, handle) in handles {
            if let Err(e) = handle.await {
                debug!(app_id = %app_id, error = %e, "probe task did not complete");
                let outcome = ProbeOutcome::Failed(ProbeFailure::Panicked);
                self.notify(app_id, &outcome);
                report.record(app_id, &outcome);
            }
        }

        info!(
            observed = report.observed,
            supported = report.partition.supported().len(),
            unsupported = report.partition.unsupported().len(),
            failed = report.failed,
            empty_labels = report.empty_labels,
            "collection finished"
        );

        report
    }

    fn notify(&self, app_id: AppId, outcome: &ProbeOutcome) {
        if let Some(observe) = &self.observe {
            observe(app_id, outcome);
        }
    }
}
