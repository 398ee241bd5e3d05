//! Shared in-memory stand-in for the cluster, recording every call it sees.

// Each test binary uses a different subset of this fixture.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use kaudit::client::{ApiFailure, ClusterOps};
use kaudit::types::ResourceKind;

#[derive(Default)]
pub struct MockCluster {
    /// Kinds whose list call comes back forbidden.
    pub deny_list: Vec<ResourceKind>,
    /// Kinds whose list call fails with a non-authorization error.
    pub break_list: Vec<ResourceKind>,
    /// Items each successful list reports.
    pub list_count: usize,
    pub fail_create: Option<ApiFailure>,
    pub fail_patch: Option<ApiFailure>,
    pub fail_delete: Option<ApiFailure>,
    pub calls: Mutex<Vec<String>>,
}

impl MockCluster {
    pub fn granting() -> Self {
        Self::default()
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("call log poisoned").push(call);
    }
}

pub fn forbidden() -> ApiFailure {
    ApiFailure::Forbidden(String::from("RBAC: access denied"))
}

pub fn broken() -> ApiFailure {
    ApiFailure::Other(String::from("connection reset by peer"))
}

#[async_trait]
impl ClusterOps for MockCluster {
    async fn list(
        &self,
        kind: ResourceKind,
        namespace: Option<&str>,
    ) -> Result<usize, ApiFailure> {
        self.record(match namespace {
            Some(ns) => format!("list {kind} in {ns}"),
            None => format!("list {kind} cluster-wide"),
        });
        if self.deny_list.contains(&kind) {
            return Err(forbidden());
        }
        if self.break_list.contains(&kind) {
            return Err(broken());
        }
        Ok(self.list_count)
    }

    async fn create_volume(&self, name: &str) -> Result<(), ApiFailure> {
        self.record(format!("create {name}"));
        match &self.fail_create {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    async fn patch_volume(&self, name: &str, storage: &str) -> Result<(), ApiFailure> {
        self.record(format!("patch {name} to {storage}"));
        match &self.fail_patch {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    async fn delete_volume(&self, name: &str) -> Result<(), ApiFailure> {
        self.record(format!("delete {name}"));
        match &self.fail_delete {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}
