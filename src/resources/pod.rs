// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod operations: lifecycle, phase waits, and list-based cleanup helpers.

use crate::constants;
use crate::error::{is_not_found, FrameworkError, Result};
use crate::framework::{label_selector, Framework};
use crate::wait::{eventually, poll_until, watch_object_until};
use k8s_openapi::api::core::v1::Pod;
use kube::api::{ListParams, ObjectList};
use kube::ResourceExt;
use std::collections::BTreeMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

fn pod_phase(pod: &Pod) -> Option<&str> {
    pod.status.as_ref().and_then(|s| s.phase.as_deref())
}

/// A pod counts as started once its phase leaves Pending/Unknown.
fn pod_started(pod: &Pod) -> bool {
    matches!(pod_phase(pod), Some(p) if p != "Pending" && p != "Unknown")
}

fn pod_running(pod: &Pod) -> bool {
    pod_phase(pod) == Some("Running")
}

fn has_ip(pod: &Pod, is_match: fn(&str) -> bool) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.pod_ips.as_ref())
        .is_some_and(|ips| ips.iter().any(|p| is_match(&p.ip)))
}

impl Framework {
    pub async fn create_pod(&self, pod: &Pod) -> Result<Pod> {
        self.create_namespaced(pod).await
    }

    pub async fn get_pod(&self, name: &str, namespace: &str) -> Result<Pod> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_pod(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<Pod>(name, namespace).await
    }

    pub async fn namespace_pod_list(&self, namespace: &str) -> Result<ObjectList<Pod>> {
        self.list_namespaced(namespace, &ListParams::default()).await
    }

    /// List pods across all namespaces matching the given labels.
    pub async fn pod_list_by_label(
        &self,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<Pod>> {
        if labels.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let lp = ListParams::default().labels(&label_selector(labels));
        self.list_all(&lp).await
    }

    /// Watch the named pod until its phase leaves Pending/Unknown.
    #[instrument(skip(self, timeout))]
    pub async fn wait_pod_started(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<Pod> {
        if name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let api = self.api::<Pod>(namespace);
        watch_object_until(&api, name, timeout, |pod: &Pod| {
            debug!("pod {}/{} phase={:?}", namespace, name, pod_phase(pod));
            pod_started(pod)
        })
        .await
    }

    /// Poll until at least `expected` pods match `labels` and all matching
    /// pods report the Running phase.
    pub async fn wait_pod_list_running(
        &self,
        labels: &BTreeMap<String, String>,
        expected: usize,
        timeout: Duration,
    ) -> Result<()> {
        if labels.is_empty() || expected == 0 {
            return Err(FrameworkError::WrongInput);
        }
        poll_until(
            || async move {
                let pods = self.pod_list_by_label(labels).await?;
                let running = pods.items.len() >= expected && pods.items.iter().all(pod_running);
                Ok(running.then_some(()))
            },
            timeout,
            constants::POLL_INTERVAL,
        )
        .await
    }

    /// Poll until every pod in the namespace reports the Running phase.
    pub async fn wait_namespace_pod_running(
        &self,
        namespace: &str,
        timeout: Duration,
    ) -> Result<()> {
        if namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        poll_until(
            || async move {
                let pods = self.namespace_pod_list(namespace).await?;
                Ok(pods.items.iter().all(pod_running).then_some(()))
            },
            timeout,
            constants::POLL_INTERVAL,
        )
        .await
    }

    /// Poll until no pod in the namespace matches the given labels.
    pub async fn wait_delete_until_complete(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
        timeout: Duration,
    ) -> Result<()> {
        if namespace.is_empty() || labels.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let lp = ListParams::default().labels(&label_selector(labels));
        let lp = &lp;
        poll_until(
            || async move {
                let pods: ObjectList<Pod> = self.list_namespaced(namespace, lp).await?;
                Ok(pods.items.is_empty().then_some(()))
            },
            timeout,
            constants::POLL_INTERVAL,
        )
        .await
    }

    /// Delete the named pod and poll until the apiserver reports it gone.
    #[instrument(skip(self, timeout))]
    pub async fn delete_pod_until_finish(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<()> {
        self.delete_pod(name, namespace).await?;

        let api = self.api::<Pod>(namespace);
        let gone = eventually(
            || {
                let api = api.clone();
                let name = name.to_string();
                async move { matches!(api.get(&name).await, Err(e) if is_not_found(&e)) }
            },
            timeout,
            constants::POLL_INTERVAL,
        )
        .await;
        if !gone {
            return Err(FrameworkError::Timeout);
        }
        Ok(())
    }

    /// Delete every pod in the list.
    pub async fn delete_pod_list(&self, pods: &ObjectList<Pod>) -> Result<()> {
        for pod in &pods.items {
            let namespace = pod.namespace().ok_or(FrameworkError::WrongInput)?;
            self.delete_pod(&pod.name_any(), &namespace).await?;
        }
        Ok(())
    }

    /// Repeatedly delete all pods matching `labels`, once per `interval`,
    /// until the deadline elapses. Useful for churning workload pods in
    /// resilience tests; the deadline is the normal exit.
    pub async fn delete_pod_list_repeatedly(
        &self,
        labels: &BTreeMap<String, String>,
        interval: Duration,
        timeout: Duration,
    ) -> Result<()> {
        if labels.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let churn = async {
            loop {
                let pods = self.pod_list_by_label(labels).await?;
                self.delete_pod_list(&pods).await?;
                sleep(interval).await;
            }
        };
        match tokio::time::timeout(timeout, churn).await {
            Ok(res) => res,
            Err(_) => Ok(()),
        }
    }

    /// True if every pod in the list reports the Running phase.
    pub fn check_pod_list_running(&self, pods: &ObjectList<Pod>) -> bool {
        pods.items.iter().all(pod_running)
    }

    /// True if every pod carries the IP families enabled in the
    /// framework configuration.
    pub fn pods_have_expected_ips(&self, pods: &ObjectList<Pod>) -> bool {
        for pod in &pods.items {
            if self.config().ipv4_enabled && !has_ip(pod, |ip| ip.parse::<Ipv4Addr>().is_ok()) {
                warn!("pod {} has no ipv4 address", pod.name_any());
                return false;
            }
            if self.config().ipv6_enabled && !has_ip(pod, |ip| ip.parse::<Ipv6Addr>().is_ok()) {
                warn!("pod {} has no ipv6 address", pod.name_any());
                return false;
            }
        }
        true
    }
}
