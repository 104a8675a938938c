// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! SpiderMultusConfig operations.

use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use crate::types::SpiderMultusConfig;
use kube::api::{Api, ListParams, ObjectList};
use kube::ResourceExt;

impl Framework {
    pub async fn create_spider_multus_config(
        &self,
        smc: &SpiderMultusConfig,
    ) -> Result<SpiderMultusConfig> {
        let namespace = smc.namespace().ok_or(FrameworkError::WrongInput)?;
        let api: Api<SpiderMultusConfig> = self.api(&namespace);
        self.create_guarded(&api, smc).await
    }

    pub async fn get_spider_multus_config(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<SpiderMultusConfig> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn namespace_spider_multus_config_list(
        &self,
        namespace: &str,
    ) -> Result<ObjectList<SpiderMultusConfig>> {
        self.list_namespaced(namespace, &ListParams::default()).await
    }

    pub async fn delete_spider_multus_config(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<SpiderMultusConfig>(name, namespace)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameworkConfig;
    use crate::test_utils::{not_found_json, status_success_json, MockService};

    fn smc_json(name: &str) -> String {
        serde_json::json!({
            "apiVersion": "spiderpool.spidernet.io/v2beta1",
            "kind": "SpiderMultusConfig",
            "metadata": {"name": name, "namespace": "kube-system"},
            "spec": {"cniType": "macvlan", "enableCoordinator": true}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_spider_multus_config_lifecycle() {
        let base =
            "/apis/spiderpool.spidernet.io/v2beta1/namespaces/kube-system/spidermultusconfigs";
        let mock = MockService::new()
            .on_get(
                &format!("{base}/overlay"),
                404,
                &not_found_json("spidermultusconfigs", "overlay"),
            )
            .on_post(base, 201, &smc_json("overlay"))
            .on_delete(&format!("{base}/overlay"), 200, &status_success_json());
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let smc: SpiderMultusConfig = serde_json::from_str(&smc_json("overlay")).unwrap();
        let created = f.create_spider_multus_config(&smc).await.unwrap();
        assert_eq!(created.spec.cni_type.as_deref(), Some("macvlan"));
        f.delete_spider_multus_config("overlay", "kube-system")
            .await
            .unwrap();
    }
}
