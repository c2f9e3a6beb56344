use super::v1::CStorPoolInstance;
use async_trait::async_trait;
use kube::{
    api::{Patch, PatchParams},
    Api, Client,
};
use serde_json::Value;

/// Get the CStorPoolInstance api.
pub(crate) fn api(client: &Client, namespace: &str) -> Api<CStorPoolInstance> {
    Api::namespaced(client.clone(), namespace)
}

/// Cluster operations the patchers need on CStorPoolInstance CRs.
#[async_trait]
pub trait CspiClient: Send + Sync {
    /// Get the named CR from the given namespace.
    async fn get(&self, name: &str, namespace: &str) -> Result<CStorPoolInstance, kube::Error>;
    /// Apply the given document to the named CR as a json merge patch.
    async fn merge_patch(
        &self,
        name: &str,
        namespace: &str,
        document: &Value,
    ) -> Result<CStorPoolInstance, kube::Error>;
}

#[async_trait]
impl CspiClient for Client {
    async fn get(&self, name: &str, namespace: &str) -> Result<CStorPoolInstance, kube::Error> {
        api(self, namespace).get(name).await
    }

    async fn merge_patch(
        &self,
        name: &str,
        namespace: &str,
        document: &Value,
    ) -> Result<CStorPoolInstance, kube::Error> {
        api(self, namespace)
            .patch(name, &PatchParams::default(), &Patch::Merge(document))
            .await
    }
}

#[async_trait]
impl<T: CspiClient + ?Sized> CspiClient for std::sync::Arc<T> {
    async fn get(&self, name: &str, namespace: &str) -> Result<CStorPoolInstance, kube::Error> {
        (**self).get(name, namespace).await
    }

    async fn merge_patch(
        &self,
        name: &str,
        namespace: &str,
        document: &Value,
    ) -> Result<CStorPoolInstance, kube::Error> {
        (**self).merge_patch(name, namespace, document).await
    }
}
