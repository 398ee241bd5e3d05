/// Name prefix for throwaway persistent volumes created by the write-cycle
/// probe. Kept recognizable so a leaked object is easy to find and remove.
pub const PROBE_PV_PREFIX: &str = "api-tester-pv";

/// Storage capacity the probe volume is created with.
pub const PROBE_PV_INITIAL_CAPACITY: &str = "1Gi";

/// Capacity the patch step changes the volume to. Harmless attribute, only
/// there to exercise the patch verb.
pub const PROBE_PV_PATCHED_CAPACITY: &str = "2Gi";

/// Seconds between cycles in continuous mode when none is given.
pub const DEFAULT_INTERVAL_SECS: u64 = 30;
