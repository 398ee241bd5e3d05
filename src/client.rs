use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{
    Event, PersistentVolume, PersistentVolumeClaim, Pod, Service,
};
use kube::api::{DeleteParams, ListParams, Patch, PatchParams, PostParams};
use kube::{Api, Client};
use serde_json::json;
use thiserror::Error;

use crate::types::ResourceKind;

/// Classified failure of one cluster API call.
///
/// The distinction that matters to the audit is `Forbidden` versus everything
/// else: a forbidden response is a definitive access denial, any other
/// failure is reported as such but still counts against the probe.
#[derive(Clone, Debug, Error)]
pub enum ApiFailure {
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

/// The cluster operations the battery needs, one typed call per probe step.
///
/// The audit core only ever talks to the cluster through this trait; the
/// production implementation is [`KubeOps`], tests substitute their own.
#[async_trait]
pub trait ClusterOps: Send + Sync {
    /// Lists resources of `kind`, in `namespace` for namespaced kinds or
    /// across the cluster when `namespace` is `None`. Returns the item count.
    async fn list(&self, kind: ResourceKind, namespace: Option<&str>)
        -> Result<usize, ApiFailure>;

    async fn create_volume(&self, name: &str) -> Result<(), ApiFailure>;

    async fn patch_volume(&self, name: &str, storage: &str) -> Result<(), ApiFailure>;

    async fn delete_volume(&self, name: &str) -> Result<(), ApiFailure>;
}

/// [`ClusterOps`] over a `kube::Client`, dispatching each kind to its typed
/// `Api` handle.
pub struct KubeOps {
    client: Client,
}

impl KubeOps {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn namespaced<K>(&self, namespace: &str) -> Api<K>
    where
        K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope>,
        K::DynamicType: Default,
    {
        Api::namespaced(self.client.clone(), namespace)
    }

    fn volumes(&self) -> Api<PersistentVolume> {
        Api::all(self.client.clone())
    }
}

fn classify_error(err: kube::Error) -> ApiFailure {
    match err {
        kube::Error::Api(e) if e.code == 401 || e.code == 403 => ApiFailure::Forbidden(e.message),
        kube::Error::Api(e) if e.code == 404 => ApiFailure::NotFound(e.message),
        other => ApiFailure::Other(other.to_string()),
    }
}

async fn count<K>(api: Api<K>) -> Result<usize, ApiFailure>
where
    K: Clone + std::fmt::Debug + serde::de::DeserializeOwned,
{
    let list = api
        .list(&ListParams::default())
        .await
        .map_err(classify_error)?;
    Ok(list.items.len())
}

#[async_trait]
impl ClusterOps for KubeOps {
    async fn list(
        &self,
        kind: ResourceKind,
        namespace: Option<&str>,
    ) -> Result<usize, ApiFailure> {
        match (kind, namespace) {
            (ResourceKind::Pod, Some(ns)) => count(self.namespaced::<Pod>(ns)).await,
            (ResourceKind::Deployment, Some(ns)) => count(self.namespaced::<Deployment>(ns)).await,
            (ResourceKind::Service, Some(ns)) => count(self.namespaced::<Service>(ns)).await,
            (ResourceKind::PersistentVolumeClaim, None) => {
                count(Api::<PersistentVolumeClaim>::all(self.client.clone())).await
            }
            (ResourceKind::PersistentVolume, None) => count(self.volumes()).await,
            (ResourceKind::Event, None) => count(Api::<Event>::all(self.client.clone())).await,
            (kind, namespace) => Err(ApiFailure::Other(format!(
                "unsupported list target: {kind} with namespace {namespace:?}"
            ))),
        }
    }

    async fn create_volume(&self, name: &str) -> Result<(), ApiFailure> {
        let body: PersistentVolume = serde_json::from_value(json!({
            "apiVersion": "v1",
            "kind": "PersistentVolume",
            "metadata": { "name": name },
            "spec": {
                "capacity": { "storage": crate::constants::PROBE_PV_INITIAL_CAPACITY },
                "accessModes": ["ReadWriteOnce"],
                "persistentVolumeReclaimPolicy": "Retain",
                "storageClassName": "manual",
                "hostPath": { "path": "/mnt/data" },
            }
        }))
        .map_err(|e| ApiFailure::Other(format!("invalid volume body: {e}")))?;
        self.volumes()
            .create(&PostParams::default(), &body)
            .await
            .map(|_| ())
            .map_err(classify_error)
    }

    async fn patch_volume(&self, name: &str, storage: &str) -> Result<(), ApiFailure> {
        // Explicit merge patch rather than resubmitting a fetched object, so
        // no server-populated fields are carried back up.
        let patch = json!({
            "spec": { "capacity": { "storage": storage } }
        });
        self.volumes()
            .patch(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await
            .map(|_| ())
            .map_err(classify_error)
    }

    async fn delete_volume(&self, name: &str) -> Result<(), ApiFailure> {
        self.volumes()
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(classify_error)
    }
}
