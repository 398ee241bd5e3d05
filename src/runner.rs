use chrono::Utc;
use tracing::{debug, info};

use crate::battery::BATTERY;
use crate::classify::classify;
use crate::client::ClusterOps;
use crate::sequencer::run_write_cycle;
use crate::types::{AuditResult, Outcome, ProbeAction, Scope};

/// Runs the full battery once against `namespace`, sequentially and in
/// declared order.
///
/// Every probe yields exactly one verdict; a failed probe is recorded and
/// the run moves on, so the result is always complete. This function never
/// fails itself, which is what lets the scheduler loop treat a misbehaving
/// cluster as data rather than as a crash.
pub async fn run(ops: &dyn ClusterOps, namespace: &str) -> AuditResult {
    let mut verdicts = Vec::with_capacity(BATTERY.len());
    let mut leaks = Vec::new();

    for probe in BATTERY {
        let verdict = match probe.action {
            ProbeAction::List => {
                let ns = match probe.scope {
                    Scope::Namespaced => Some(namespace),
                    Scope::ClusterWide => None,
                };
                let result = ops.list(probe.kind, ns).await;
                classify(probe, &result)
            }
            ProbeAction::WriteCycle => {
                let report = run_write_cycle(ops, probe).await;
                leaks.extend(report.leak);
                report.verdict
            }
        };
        debug!(
            kind = %verdict.probe.kind,
            outcome = ?verdict.outcome,
            "probe finished"
        );
        verdicts.push(verdict);
    }

    let denied = verdicts
        .iter()
        .filter(|v| v.outcome == Outcome::Denied)
        .count();
    info!(
        namespace,
        granted = verdicts.len() - denied,
        denied,
        leaks = leaks.len(),
        "audit cycle finished"
    );

    AuditResult {
        namespace: namespace.to_string(),
        finished_at: Utc::now(),
        verdicts,
        leaks,
    }
}
