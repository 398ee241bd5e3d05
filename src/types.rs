use chrono::{DateTime, Utc};
use serde::Serialize;

/// The fixed set of resource kinds the audit probes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ResourceKind {
    Pod,
    Deployment,
    Service,
    PersistentVolumeClaim,
    PersistentVolume,
    Event,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pod => "Pod",
            ResourceKind::Deployment => "Deployment",
            ResourceKind::Service => "Service",
            ResourceKind::PersistentVolumeClaim => "PersistentVolumeClaim",
            ResourceKind::PersistentVolume => "PersistentVolume",
            ResourceKind::Event => "Event",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a probe targets one namespace or the whole cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Scope {
    Namespaced,
    ClusterWide,
}

/// A single call against the cluster API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OperationKind {
    List,
    Create,
    Patch,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::List => "list",
            OperationKind::Create => "create",
            OperationKind::Patch => "patch",
            OperationKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a probe does: a plain list, or the create→patch→delete cycle run
/// against a throwaway object to test write access as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ProbeAction {
    List,
    WriteCycle,
}

/// One declared attempt to exercise an operation on a resource kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Probe {
    pub kind: ResourceKind,
    pub scope: Scope,
    pub action: ProbeAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Granted,
    Denied,
}

/// The classification assigned to one probe for one cycle.
#[derive(Clone, Debug, Serialize)]
pub struct Verdict {
    pub probe: Probe,
    pub outcome: Outcome,
    /// Failure description for Denied verdicts, item count for granted
    /// lists. For the write cycle this names the sub-operation that failed.
    pub detail: Option<String>,
}

/// A probe object whose cleanup delete failed. The object is still in the
/// cluster and needs manual remediation.
#[derive(Clone, Debug, Serialize)]
pub struct LeakedResource {
    pub kind: ResourceKind,
    pub name: String,
    pub detail: String,
}

impl std::fmt::Display for LeakedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "leaked {} {}: {}", self.kind, self.name, self.detail)
    }
}

/// Everything one battery run produced, in declared probe order.
#[derive(Clone, Debug, Serialize)]
pub struct AuditResult {
    pub namespace: String,
    pub finished_at: DateTime<Utc>,
    pub verdicts: Vec<Verdict>,
    pub leaks: Vec<LeakedResource>,
}
