//! Health check aggregation engine.
//!
//! `check_readiness` fans out one task per registered probe, collects each
//! task's [`DependencyCheckItem`] over a channel, and computes a single
//! verdict once every task has reported. Each aggregation run owns its
//! result set exclusively; nothing is shared across runs.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, error, instrument};

use super::probes::DependencyProbe;
use super::types::{AggregatedHealthResult, DependencyCheckItem};

/// Orchestrates concurrent dependency probing and verdict computation.
///
/// Probes are registered once at construction time; every readiness call
/// is a stateless one-shot probe-and-aggregate run.
pub struct HealthChecker {
    probes: Vec<Arc<dyn DependencyProbe>>,
    probe_timeout: Duration,
}

impl HealthChecker {
    pub fn new(probe_timeout: Duration) -> Self {
        Self {
            probes: Vec::new(),
            probe_timeout,
        }
    }

    /// Register a dependency probe. Registration order does not determine
    /// result order; items arrive in completion order.
    pub fn register(mut self, probe: Arc<dyn DependencyProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Liveness check: confirms the process is accepting requests.
    ///
    /// Never inspects dependencies and always succeeds.
    #[instrument(name = "health.check_liveness", skip(self))]
    pub async fn check_liveness(&self) {
        debug!("liveness check");
    }

    /// Readiness check: probe every registered dependency concurrently and
    /// aggregate the results into a single verdict.
    ///
    /// Individual probe failures are data, not errors; this method always
    /// produces a result. A probe that outruns the configured timeout, or
    /// panics inside its task, is recorded as an unhealthy item rather
    /// than dropped, so the result always carries exactly one item per
    /// registered probe.
    #[instrument(name = "health.check_readiness", skip(self))]
    pub async fn check_readiness(&self) -> AggregatedHealthResult {
        let started = Instant::now();

        let (tx, mut rx) = mpsc::channel::<DependencyCheckItem>(self.probes.len().max(1));
        let mut handles = Vec::with_capacity(self.probes.len());

        for probe in &self.probes {
            let probe = Arc::clone(probe);
            let tx = tx.clone();
            let timeout = self.probe_timeout;

            let name = probe.name().to_string();
            let dependency_type = probe.dependency_type();

            let handle = tokio::spawn(async move {
                let item = match tokio::time::timeout(timeout, probe.check()).await {
                    Ok(Ok(())) => {
                        DependencyCheckItem::healthy(probe.name(), probe.dependency_type())
                    }
                    Ok(Err(e)) => {
                        error!(probe = probe.name(), error = %e, "dependency probe failed");
                        DependencyCheckItem::unhealthy(
                            probe.name(),
                            probe.dependency_type(),
                            e.to_string(),
                        )
                    }
                    Err(_elapsed) => {
                        error!(
                            probe = probe.name(),
                            timeout_ms = timeout.as_millis() as u64,
                            "dependency probe timed out"
                        );
                        DependencyCheckItem::unhealthy(
                            probe.name(),
                            probe.dependency_type(),
                            format!("health check timed out after {}ms", timeout.as_millis()),
                        )
                    }
                };
                // The receiver outlives every sender; a send only fails if
                // the aggregator itself was cancelled.
                let _ = tx.send(item).await;
            });

            handles.push((name, dependency_type, handle));
        }

        // Drop the original sender so the drain loop terminates once every
        // task has either sent its item or panicked (a panic drops the
        // task's sender clone, so a faulted probe can never leave the
        // aggregator blocked here).
        drop(tx);

        let mut items = Vec::with_capacity(handles.len());
        while let Some(item) = rx.recv().await {
            items.push(item);
        }

        // Every task has finished by now; joining only surfaces panics.
        // A faulted probe is recorded as unhealthy instead of silently
        // dropped from the result set.
        for (name, dependency_type, handle) in handles {
            if let Err(join_err) = handle.await {
                error!(probe = %name, error = %join_err, "dependency probe task panicked");
                items.push(DependencyCheckItem::unhealthy(
                    name,
                    dependency_type,
                    format!("probe task failed: {join_err}"),
                ));
            }
        }

        let result = AggregatedHealthResult::from_items(items);

        debug!(
            probes = self.probes.len(),
            is_ok = result.is_ok,
            duration_ms = started.elapsed().as_millis() as u64,
            "readiness check complete"
        );

        result
    }
}
