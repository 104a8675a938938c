// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! StatefulSet operations, thin wrappers over the generic workload helpers.

use crate::error::Result;
use crate::framework::Framework;
use k8s_openapi::api::apps::v1::StatefulSet;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ObjectList;
use std::time::Duration;

impl Framework {
    pub async fn create_statefulset(&self, sts: &StatefulSet) -> Result<StatefulSet> {
        self.create_namespaced(sts).await
    }

    pub async fn get_statefulset(&self, name: &str, namespace: &str) -> Result<StatefulSet> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_statefulset(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<StatefulSet>(name, namespace).await
    }

    pub async fn wait_statefulset_ready(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<StatefulSet> {
        self.wait_workload_ready(name, namespace, timeout).await
    }

    pub async fn statefulset_pod_list(&self, sts: &StatefulSet) -> Result<ObjectList<Pod>> {
        self.workload_pod_list(sts).await
    }

    pub async fn scale_statefulset(&self, sts: &StatefulSet, replicas: i32) -> Result<StatefulSet> {
        self.scale_workload(sts, replicas).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameworkConfig;
    use crate::test_utils::{list_json, watch_added, MockService};

    fn statefulset_json(name: &str, replicas: i32, ready: i32) -> String {
        serde_json::json!({
            "apiVersion": "apps/v1",
            "kind": "StatefulSet",
            "metadata": {"name": name, "namespace": "default"},
            "spec": {
                "replicas": replicas,
                "serviceName": name,
                "selector": {"matchLabels": {"app": name}},
                "template": {}
            },
            "status": {"replicas": replicas, "readyReplicas": ready}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_wait_statefulset_ready() {
        let mock = MockService::new().on_watch(
            "/apis/apps/v1/namespaces/default/statefulsets",
            &[watch_added(&statefulset_json("db", 3, 3))],
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let sts = f
            .wait_statefulset_ready("db", "default", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(sts.status.unwrap().ready_replicas, Some(3));
    }

    #[tokio::test]
    async fn test_statefulset_pod_list_uses_selector() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/default/pods",
            200,
            &list_json(
                "v1",
                "PodList",
                &[crate::test_utils::pod_json("db-0", "default", "Running")],
            ),
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let sts: StatefulSet = serde_json::from_str(&statefulset_json("db", 3, 3)).unwrap();
        let pods = f.statefulset_pod_list(&sts).await.unwrap();
        assert_eq!(pods.items.len(), 1);
    }
}
