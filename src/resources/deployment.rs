// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment operations, thin wrappers over the generic workload helpers.

use crate::error::Result;
use crate::framework::Framework;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ObjectList;
use std::time::Duration;

impl Framework {
    pub async fn create_deployment(&self, deployment: &Deployment) -> Result<Deployment> {
        self.create_namespaced(deployment).await
    }

    pub async fn get_deployment(&self, name: &str, namespace: &str) -> Result<Deployment> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_deployment(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<Deployment>(name, namespace).await
    }

    /// Watch the deployment until its ready replicas reach the desired count.
    pub async fn wait_deployment_ready(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<Deployment> {
        self.wait_workload_ready(name, namespace, timeout).await
    }

    pub async fn deployment_pod_list(&self, deployment: &Deployment) -> Result<ObjectList<Pod>> {
        self.workload_pod_list(deployment).await
    }

    pub async fn scale_deployment(
        &self,
        deployment: &Deployment,
        replicas: i32,
    ) -> Result<Deployment> {
        self.scale_workload(deployment, replicas).await
    }
}
