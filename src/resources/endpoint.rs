// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Endpoints operations, for asserting which pod addresses back a service.

use crate::error::Result;
use crate::framework::Framework;
use k8s_openapi::api::core::v1::Endpoints;
use kube::api::{ListParams, ObjectList};

impl Framework {
    pub async fn create_endpoints(&self, ep: &Endpoints) -> Result<Endpoints> {
        self.create_namespaced(ep).await
    }

    pub async fn get_endpoints(&self, name: &str, namespace: &str) -> Result<Endpoints> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn namespace_endpoints_list(&self, namespace: &str) -> Result<ObjectList<Endpoints>> {
        self.list_namespaced(namespace, &ListParams::default()).await
    }

    pub async fn delete_endpoints(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<Endpoints>(name, namespace).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameworkConfig;
    use crate::test_utils::{list_json, MockService};

    fn endpoints_json(name: &str, ip: &str) -> String {
        serde_json::json!({
            "apiVersion": "v1",
            "kind": "Endpoints",
            "metadata": {"name": name, "namespace": "default"},
            "subsets": [{"addresses": [{"ip": ip}], "ports": [{"port": 80}]}]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_get_endpoints_exposes_addresses() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/default/endpoints/web",
            200,
            &endpoints_json("web", "10.244.1.5"),
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let ep = f.get_endpoints("web", "default").await.unwrap();
        let subsets = ep.subsets.unwrap();
        assert_eq!(subsets[0].addresses.as_ref().unwrap()[0].ip, "10.244.1.5");
    }

    #[tokio::test]
    async fn test_namespace_endpoints_list() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/default/endpoints",
            200,
            &list_json(
                "v1",
                "EndpointsList",
                &[
                    endpoints_json("web", "10.244.1.5"),
                    endpoints_json("api", "10.244.1.6"),
                ],
            ),
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let list = f.namespace_endpoints_list("default").await.unwrap();
        assert_eq!(list.items.len(), 2);
    }
}
