// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ReplicaSet operations, thin wrappers over the generic workload helpers.

use crate::error::Result;
use crate::framework::Framework;
use k8s_openapi::api::apps::v1::ReplicaSet;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ObjectList;
use std::time::Duration;

impl Framework {
    pub async fn create_replicaset(&self, rs: &ReplicaSet) -> Result<ReplicaSet> {
        self.create_namespaced(rs).await
    }

    pub async fn get_replicaset(&self, name: &str, namespace: &str) -> Result<ReplicaSet> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_replicaset(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<ReplicaSet>(name, namespace).await
    }

    pub async fn wait_replicaset_ready(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<ReplicaSet> {
        self.wait_workload_ready(name, namespace, timeout).await
    }

    pub async fn replicaset_pod_list(&self, rs: &ReplicaSet) -> Result<ObjectList<Pod>> {
        self.workload_pod_list(rs).await
    }

    pub async fn scale_replicaset(&self, rs: &ReplicaSet, replicas: i32) -> Result<ReplicaSet> {
        self.scale_workload(rs, replicas).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameworkConfig;
    use crate::error::FrameworkError;
    use crate::test_utils::{watch_added, MockService};

    fn replicaset_json(name: &str, replicas: i32, ready: i32) -> String {
        serde_json::json!({
            "apiVersion": "apps/v1",
            "kind": "ReplicaSet",
            "metadata": {"name": name, "namespace": "default"},
            "spec": {
                "replicas": replicas,
                "selector": {"matchLabels": {"app": name}}
            },
            "status": {"readyReplicas": ready, "replicas": replicas}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_wait_replicaset_ready() {
        let mock = MockService::new().on_watch(
            "/apis/apps/v1/namespaces/default/replicasets",
            &[watch_added(&replicaset_json("workers", 3, 3))],
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let rs = f
            .wait_replicaset_ready("workers", "default", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(rs.status.unwrap().ready_replicas, Some(3));
    }

    #[tokio::test]
    async fn test_wait_replicaset_ready_times_out_below_target() {
        let mock = MockService::new().on_watch(
            "/apis/apps/v1/namespaces/default/replicasets",
            &[watch_added(&replicaset_json("workers", 3, 2))],
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let err = f
            .wait_replicaset_ready("workers", "default", Duration::from_millis(200))
            .await
            .unwrap_err();
        // The stream ends after the only event, before the deadline.
        assert!(matches!(
            err,
            FrameworkError::WatchClosed | FrameworkError::Timeout
        ));
    }
}
