use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use crate::client::ClusterOps;
use crate::runner;
use crate::types::AuditResult;

/// Runs audit cycles forever, `interval` apart, handing each result to
/// `report`.
///
/// The only unbounded loop in the program. Shutdown is cooperative: the
/// watch channel is checked before each cycle and raced against the
/// inter-cycle sleep, so a stop request never waits out a long interval.
/// A closed channel counts as a stop request.
pub async fn run_loop<F>(
    ops: &dyn ClusterOps,
    namespace: &str,
    interval: Duration,
    mut report: F,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    F: FnMut(&AuditResult),
{
    info!(namespace, interval_secs = interval.as_secs(), "audit loop started");

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        let result = runner::run(ops, namespace).await;
        report(&result);

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    info!("audit loop stopped");
}
