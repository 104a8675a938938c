// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The replica-workload capability and the generic wait/scale/pod-list
//! operations written once against it.
//!
//! Every controller kind that reports a desired and a ready count implements
//! [`ReplicaWorkload`]; the per-kind modules only add thin wrappers around
//! the generic operations here.

use crate::error::{FrameworkError, Result};
use crate::framework::{label_selector, Framework, NamespacedObject};
use crate::wait::watch_object_until;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{ListParams, ObjectList, Patch, PatchParams};
use kube::{Resource, ResourceExt};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// A workload kind that reports a desired and a ready replica count.
pub trait ReplicaWorkload: NamespacedObject {
    fn desired_replicas(&self) -> i32;
    fn ready_replicas(&self) -> i32;
    /// Label selector for the pods owned by this workload
    fn match_labels(&self) -> Option<&BTreeMap<String, String>>;

    fn is_ready(&self) -> bool {
        self.desired_replicas() == self.ready_replicas()
    }
}

impl ReplicaWorkload for Deployment {
    fn desired_replicas(&self) -> i32 {
        self.spec.as_ref().and_then(|s| s.replicas).unwrap_or(0)
    }

    fn ready_replicas(&self) -> i32 {
        self.status
            .as_ref()
            .and_then(|s| s.ready_replicas)
            .unwrap_or(0)
    }

    fn match_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.spec.as_ref().and_then(|s| s.selector.match_labels.as_ref())
    }
}

impl ReplicaWorkload for ReplicaSet {
    fn desired_replicas(&self) -> i32 {
        self.spec.as_ref().and_then(|s| s.replicas).unwrap_or(0)
    }

    fn ready_replicas(&self) -> i32 {
        self.status
            .as_ref()
            .and_then(|s| s.ready_replicas)
            .unwrap_or(0)
    }

    fn match_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.spec.as_ref().and_then(|s| s.selector.match_labels.as_ref())
    }
}

impl ReplicaWorkload for StatefulSet {
    fn desired_replicas(&self) -> i32 {
        self.spec.as_ref().and_then(|s| s.replicas).unwrap_or(0)
    }

    fn ready_replicas(&self) -> i32 {
        self.status
            .as_ref()
            .and_then(|s| s.ready_replicas)
            .unwrap_or(0)
    }

    fn match_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.spec.as_ref().and_then(|s| s.selector.match_labels.as_ref())
    }
}

impl ReplicaWorkload for DaemonSet {
    fn desired_replicas(&self) -> i32 {
        self.status
            .as_ref()
            .map(|s| s.desired_number_scheduled)
            .unwrap_or(0)
    }

    fn ready_replicas(&self) -> i32 {
        self.status.as_ref().map(|s| s.number_ready).unwrap_or(0)
    }

    fn match_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.spec.as_ref().and_then(|s| s.selector.match_labels.as_ref())
    }
}

impl ReplicaWorkload for Job {
    fn desired_replicas(&self) -> i32 {
        self.spec.as_ref().and_then(|s| s.parallelism).unwrap_or(0)
    }

    fn ready_replicas(&self) -> i32 {
        self.status.as_ref().and_then(|s| s.active).unwrap_or(0)
    }

    fn match_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.spec
            .as_ref()
            .and_then(|s| s.selector.as_ref())
            .and_then(|sel| sel.match_labels.as_ref())
    }

    // A job with zero active pods has not started yet.
    fn is_ready(&self) -> bool {
        let active = self.ready_replicas();
        active != 0 && active == self.desired_replicas()
    }
}

impl Framework {
    /// Watch the named workload until its ready count reaches its desired
    /// count, returning the observed snapshot.
    pub async fn wait_workload_ready<K: ReplicaWorkload>(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<K> {
        if name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let api = self.api::<K>(namespace);
        watch_object_until(&api, name, timeout, |obj: &K| {
            debug!(
                "{} {}/{} ready={}/{}",
                K::kind(&()),
                namespace,
                name,
                obj.ready_replicas(),
                obj.desired_replicas()
            );
            obj.is_ready()
        })
        .await
    }

    /// List the pods selected by the workload's own label selector.
    pub async fn workload_pod_list<K: ReplicaWorkload>(&self, obj: &K) -> Result<ObjectList<Pod>> {
        let namespace = obj.namespace().ok_or(FrameworkError::WrongInput)?;
        let labels = obj.match_labels().ok_or(FrameworkError::WrongInput)?;
        if labels.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let lp = ListParams::default().labels(&label_selector(labels));
        self.list_namespaced(&namespace, &lp).await
    }

    /// Patch the workload's `spec.replicas` to the given count.
    pub async fn scale_workload<K: ReplicaWorkload>(&self, obj: &K, replicas: i32) -> Result<K> {
        let name = obj.meta().name.clone().ok_or(FrameworkError::WrongInput)?;
        let namespace = obj.namespace().ok_or(FrameworkError::WrongInput)?;

        let patch = serde_json::json!({"spec": {"replicas": replicas}});
        Ok(self
            .api::<K>(&namespace)
            .patch(&name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?)
    }
}
