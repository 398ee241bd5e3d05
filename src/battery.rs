use crate::types::{Probe, ProbeAction, ResourceKind, Scope};

/// The fixed, ordered battery run once per cycle.
///
/// Namespaced reads come first, then cluster-wide reads, and the persistent
/// volume write cycle runs last so it can never disturb state an earlier
/// read depends on. Adding a kind means appending a declaration here; there
/// is no logic in this table.
pub const BATTERY: [Probe; 6] = [
    Probe {
        kind: ResourceKind::Pod,
        scope: Scope::Namespaced,
        action: ProbeAction::List,
    },
    Probe {
        kind: ResourceKind::Deployment,
        scope: Scope::Namespaced,
        action: ProbeAction::List,
    },
    Probe {
        kind: ResourceKind::Service,
        scope: Scope::Namespaced,
        action: ProbeAction::List,
    },
    Probe {
        kind: ResourceKind::PersistentVolumeClaim,
        scope: Scope::ClusterWide,
        action: ProbeAction::List,
    },
    Probe {
        kind: ResourceKind::Event,
        scope: Scope::ClusterWide,
        action: ProbeAction::List,
    },
    Probe {
        kind: ResourceKind::PersistentVolume,
        scope: Scope::ClusterWide,
        action: ProbeAction::WriteCycle,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_probes_each_kind_once() {
        let mut seen = Vec::new();
        for probe in BATTERY {
            assert!(!seen.contains(&probe.kind), "{} declared twice", probe.kind);
            seen.push(probe.kind);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn namespaced_probes_precede_cluster_wide() {
        let first_cluster = BATTERY
            .iter()
            .position(|p| p.scope == Scope::ClusterWide)
            .expect("no cluster-wide probe declared");
        assert!(BATTERY[first_cluster..]
            .iter()
            .all(|p| p.scope == Scope::ClusterWide));
    }

    #[test]
    fn write_cycle_is_last() {
        assert_eq!(BATTERY.last().map(|p| p.action), Some(ProbeAction::WriteCycle));
        assert_eq!(
            BATTERY
                .iter()
                .filter(|p| p.action == ProbeAction::WriteCycle)
                .count(),
            1
        );
    }

    #[test]
    fn only_the_write_cycle_targets_volumes() {
        for probe in BATTERY {
            if probe.kind == ResourceKind::PersistentVolume {
                assert_eq!(probe.action, ProbeAction::WriteCycle);
                assert_eq!(probe.scope, Scope::ClusterWide);
            }
        }
    }
}
