use tracing::{debug, warn};

use crate::classify::describe;
use crate::client::ClusterOps;
use crate::constants;
use crate::types::{LeakedResource, OperationKind, Outcome, Probe, ResourceKind, Verdict};

/// Where a write cycle ended up. `MutateFailed` and `DeleteFailed` both mean
/// the probe object existed at some point after create; `DeleteFailed` means
/// it still does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleEnd {
    Done,
    CreateFailed,
    MutateFailed,
    DeleteFailed,
}

/// Result of one write cycle: exactly one verdict, plus a leak report when
/// the cleanup delete failed.
#[derive(Clone, Debug)]
pub struct CycleReport {
    pub end: CycleEnd,
    pub verdict: Verdict,
    pub leak: Option<LeakedResource>,
}

fn probe_object_name() -> String {
    format!(
        "{}-{:x}",
        constants::PROBE_PV_PREFIX,
        chrono::Utc::now().timestamp_millis()
    )
}

/// Runs the create→patch→delete sequence against a throwaway persistent
/// volume, in that order, exactly once per step.
///
/// Create failing ends the sequence with nothing to clean up. Patch failing
/// still attempts the delete, so a half-finished probe never leaves residue
/// behind silently. Delete failing surfaces a [`LeakedResource`] alongside
/// the verdict: the object is still in the cluster and the report must say
/// so rather than fold it into a permission denial.
pub async fn run_write_cycle(ops: &dyn ClusterOps, probe: Probe) -> CycleReport {
    let name = probe_object_name();
    debug!(volume = %name, "write cycle starting");

    if let Err(failure) = ops.create_volume(&name).await {
        return CycleReport {
            end: CycleEnd::CreateFailed,
            verdict: denied(probe, OperationKind::Create, &failure),
            leak: None,
        };
    }

    let patch_failure = ops
        .patch_volume(&name, constants::PROBE_PV_PATCHED_CAPACITY)
        .await
        .err();

    let delete_result = ops.delete_volume(&name).await;
    let leak = delete_result.as_ref().err().map(|failure| {
        warn!(volume = %name, error = %failure, "probe volume could not be deleted");
        LeakedResource {
            kind: ResourceKind::PersistentVolume,
            name: name.clone(),
            detail: describe(failure),
        }
    });

    match (patch_failure, delete_result) {
        (Some(failure), _) => CycleReport {
            end: if leak.is_some() {
                CycleEnd::DeleteFailed
            } else {
                CycleEnd::MutateFailed
            },
            verdict: denied(probe, OperationKind::Patch, &failure),
            leak,
        },
        (None, Err(failure)) => CycleReport {
            end: CycleEnd::DeleteFailed,
            verdict: denied(probe, OperationKind::Delete, &failure),
            leak,
        },
        (None, Ok(())) => CycleReport {
            end: CycleEnd::Done,
            verdict: Verdict {
                probe,
                outcome: Outcome::Granted,
                detail: Some(String::from("create+patch+delete succeeded")),
            },
            leak: None,
        },
    }
}

fn denied(probe: Probe, step: OperationKind, failure: &crate::client::ApiFailure) -> Verdict {
    Verdict {
        probe,
        outcome: Outcome::Denied,
        detail: Some(format!("{step}: {}", describe(failure))),
    }
}
