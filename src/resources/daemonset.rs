// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! DaemonSet operations. Readiness compares the number of ready pods with
//! the number the scheduler wants on the cluster's nodes.

use crate::error::Result;
use crate::framework::Framework;
use k8s_openapi::api::apps::v1::DaemonSet;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ObjectList;
use std::time::Duration;

impl Framework {
    pub async fn create_daemonset(&self, ds: &DaemonSet) -> Result<DaemonSet> {
        self.create_namespaced(ds).await
    }

    pub async fn get_daemonset(&self, name: &str, namespace: &str) -> Result<DaemonSet> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_daemonset(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<DaemonSet>(name, namespace).await
    }

    pub async fn wait_daemonset_ready(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<DaemonSet> {
        self.wait_workload_ready(name, namespace, timeout).await
    }

    pub async fn daemonset_pod_list(&self, ds: &DaemonSet) -> Result<ObjectList<Pod>> {
        self.workload_pod_list(ds).await
    }
}
