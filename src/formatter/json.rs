use std::fmt::Display;

use serde::Serialize;

use crate::types::{AuditResult, Outcome, ProbeAction, Scope};

pub struct Json {
    result: JsonAuditResult,
}

#[derive(Serialize)]
struct JsonVerdict {
    kind: String,
    scope: &'static str,
    probe: &'static str,
    granted: bool,
    detail: Option<String>,
}

#[derive(Serialize)]
struct JsonLeak {
    kind: String,
    name: String,
    detail: String,
}

#[derive(Serialize)]
struct JsonAuditResult {
    namespace: String,
    finished_at: String,
    verdicts: Vec<JsonVerdict>,
    leaks: Vec<JsonLeak>,
}

impl From<AuditResult> for JsonAuditResult {
    fn from(value: AuditResult) -> Self {
        Self {
            namespace: value.namespace,
            finished_at: value.finished_at.to_rfc3339(),
            verdicts: value
                .verdicts
                .into_iter()
                .map(|v| JsonVerdict {
                    kind: v.probe.kind.to_string(),
                    scope: match v.probe.scope {
                        Scope::Namespaced => "namespaced",
                        Scope::ClusterWide => "cluster-wide",
                    },
                    probe: match v.probe.action {
                        ProbeAction::List => "list",
                        ProbeAction::WriteCycle => "create+patch+delete",
                    },
                    granted: v.outcome == Outcome::Granted,
                    detail: v.detail,
                })
                .collect(),
            leaks: value
                .leaks
                .into_iter()
                .map(|l| JsonLeak {
                    kind: l.kind.to_string(),
                    name: l.name,
                    detail: l.detail,
                })
                .collect(),
        }
    }
}

impl Json {
    pub fn new(result: AuditResult) -> Self {
        Self {
            result: result.into(),
        }
    }
}

impl Display for Json {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.result) {
            Ok(output) => f.write_str(&output),
            Err(_e) => Err(std::fmt::Error),
        }
    }
}
