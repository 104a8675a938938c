// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The [`Framework`] entry point: a thin wrapper around a `kube::Client`
//! carrying the immutable test configuration, plus the generic resource
//! operations every typed helper in [`crate::resources`] delegates to.

use crate::config::FrameworkConfig;
use crate::constants;
use crate::error::{is_not_found, FrameworkError, Result};
use crate::wait::eventually;
use kube::api::{Api, DeleteParams, ListParams, ObjectList, PostParams};
use kube::core::NamespaceResourceScope;
use kube::config::KubeConfigOptions;
use kube::{Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{debug, info, instrument};

/// Object types the framework can manage through a statically typed `Api`.
pub trait ApiObject:
    Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug + Send + Sync
{
}
impl<K> ApiObject for K where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug + Send + Sync
{
}

/// Namespace-scoped [`ApiObject`]s, addressable by namespace + name.
pub trait NamespacedObject: ApiObject + Resource<Scope = NamespaceResourceScope> {}
impl<K> NamespacedObject for K where K: ApiObject + Resource<Scope = NamespaceResourceScope> {}

pub struct Framework {
    client: Client,
    config: FrameworkConfig,
}

impl Framework {
    pub fn new(client: Client, config: FrameworkConfig) -> Self {
        Self { client, config }
    }

    /// Build a framework from the configured kubeconfig path, falling back to
    /// the inferred in-cluster/local client config when no path is set.
    pub async fn connect(config: FrameworkConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = match &config.kubeconfig_path {
            Some(path) => {
                info!("Creating Kubernetes client from kubeconfig {}", path);
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read kubeconfig {path}"))?;
                let kubeconfig: kube::config::Kubeconfig =
                    serde_yaml::from_str(&raw).context("failed to parse kubeconfig")?;
                let client_config =
                    kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                        .await
                        .context("failed to create client config")?;
                Client::try_from(client_config).context("failed to create client")?
            }
            None => Client::try_default()
                .await
                .context("failed to infer client config")?,
        };
        Ok(Self::new(client, config))
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    pub(crate) fn api<K: NamespacedObject>(&self, namespace: &str) -> Api<K> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Create `obj` through `api`, first waiting out a previous copy that is
    /// still being deleted. An existing copy that is not terminating fails
    /// with [`FrameworkError::AlreadyExists`].
    pub async fn create_guarded<K: ApiObject>(&self, api: &Api<K>, obj: &K) -> Result<K> {
        let name = obj.meta().name.clone().ok_or(FrameworkError::WrongInput)?;
        let namespace = obj.namespace().unwrap_or_default();

        match api.get(&name).await {
            Ok(existing) if existing.meta().deletion_timestamp.is_none() => {
                return Err(FrameworkError::AlreadyExists {
                    kind: K::kind(&()).into_owned(),
                    namespace,
                    name,
                });
            }
            Ok(_) => {
                debug!(
                    "waiting for a same {} {}/{} to finish deleting",
                    K::kind(&()),
                    namespace,
                    name
                );
                let gone = eventually(
                    || {
                        let api = api.clone();
                        let name = name.clone();
                        async move { matches!(api.get(&name).await, Err(e) if is_not_found(&e)) }
                    },
                    self.config.resource_delete_timeout,
                    constants::POLL_INTERVAL,
                )
                .await;
                if !gone {
                    return Err(FrameworkError::Timeout);
                }
            }
            Err(e) if is_not_found(&e) => {}
            Err(e) => return Err(e.into()),
        }

        Ok(api.create(&PostParams::default(), obj).await?)
    }

    /// Guarded create for a namespace-scoped object, using its own metadata
    /// to pick the target namespace.
    pub(crate) async fn create_namespaced<K: NamespacedObject>(&self, obj: &K) -> Result<K> {
        let namespace = obj.namespace().ok_or(FrameworkError::WrongInput)?;
        if obj.meta().name.as_deref().unwrap_or_default().is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        self.create_guarded(&self.api::<K>(&namespace), obj).await
    }

    pub(crate) async fn get_namespaced<K: NamespacedObject>(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<K> {
        if name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        Ok(self.api::<K>(namespace).get(name).await?)
    }

    #[instrument(skip(self))]
    pub(crate) async fn delete_namespaced<K: NamespacedObject>(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<()> {
        if name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        self.api::<K>(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }

    pub(crate) async fn list_namespaced<K: NamespacedObject>(
        &self,
        namespace: &str,
        lp: &ListParams,
    ) -> Result<ObjectList<K>> {
        if namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        Ok(self.api::<K>(namespace).list(lp).await?)
    }

    pub(crate) async fn list_all<K: ApiObject>(&self, lp: &ListParams) -> Result<ObjectList<K>> {
        Ok(Api::<K>::all(self.client.clone()).list(lp).await?)
    }
}

/// Render a label map as a `k1=v1,k2=v2` selector string.
pub(crate) fn label_selector(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{pod_json, status_success_json, terminating_pod_json, MockService};
    use k8s_openapi::api::core::v1::Pod;
    use kube::api::ObjectMeta;
    use std::time::Duration;

    fn make_pod(name: &str, namespace: &str) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn framework_with(mock: MockService) -> Framework {
        crate::test_utils::init_tracing();
        Framework::new(mock.into_client(), FrameworkConfig::default())
    }

    #[test]
    fn test_label_selector_rendering() {
        let labels = BTreeMap::from([
            ("app".to_string(), "test".to_string()),
            ("tier".to_string(), "web".to_string()),
        ]);
        assert_eq!(label_selector(&labels), "app=test,tier=web");
    }

    #[tokio::test]
    async fn test_create_guarded_fresh_object() {
        let mock = MockService::new()
            .on_post(
                "/api/v1/namespaces/default/pods",
                201,
                &pod_json("mypod", "default", "Pending"),
            );
        let f = framework_with(mock);
        let created = f.create_namespaced(&make_pod("mypod", "default")).await.unwrap();
        assert_eq!(created.name_any(), "mypod");
    }

    #[tokio::test]
    async fn test_create_guarded_duplicate_fails() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/default/pods/mypod",
            200,
            &pod_json("mypod", "default", "Running"),
        );
        let f = framework_with(mock);
        let err = f
            .create_namespaced(&make_pod("mypod", "default"))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_create_guarded_waits_out_prior_deletion() {
        // First two gets see a terminating pod, the third sees it gone.
        let mock = MockService::new()
            .on_get_seq(
                "/api/v1/namespaces/default/pods/mypod",
                vec![
                    (200, terminating_pod_json("mypod", "default")),
                    (200, terminating_pod_json("mypod", "default")),
                    (404, crate::test_utils::not_found_json("pods", "mypod")),
                ],
            )
            .on_post(
                "/api/v1/namespaces/default/pods",
                201,
                &pod_json("mypod", "default", "Pending"),
            );
        let mut config = FrameworkConfig::default();
        config.resource_delete_timeout = Duration::from_secs(10);
        let f = Framework::new(mock.into_client(), config);
        let created = f.create_namespaced(&make_pod("mypod", "default")).await.unwrap();
        assert_eq!(created.name_any(), "mypod");
    }

    #[tokio::test]
    async fn test_create_guarded_times_out_on_stuck_deletion() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/default/pods/mypod",
            200,
            &terminating_pod_json("mypod", "default"),
        );
        let mut config = FrameworkConfig::default();
        config.resource_delete_timeout = Duration::from_millis(50);
        let f = Framework::new(mock.into_client(), config);
        let err = f
            .create_namespaced(&make_pod("mypod", "default"))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Timeout));
    }

    #[tokio::test]
    async fn test_delete_validates_input() {
        let f = framework_with(MockService::new());
        let err = f.delete_namespaced::<Pod>("", "default").await.unwrap_err();
        assert!(matches!(err, FrameworkError::WrongInput));
        let err = f.delete_namespaced::<Pod>("mypod", "").await.unwrap_err();
        assert!(matches!(err, FrameworkError::WrongInput));
    }

    #[tokio::test]
    async fn test_delete_passes_through() {
        let mock = MockService::new().on_delete(
            "/api/v1/namespaces/default/pods/mypod",
            200,
            &status_success_json(),
        );
        let f = framework_with(mock);
        f.delete_namespaced::<Pod>("mypod", "default").await.unwrap();
    }
}
