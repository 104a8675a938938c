// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Node inspection. Readiness comes from the Ready condition on each node's
//! status; a node with no conditions at all counts as not matching.

use crate::constants;
use crate::error::Result;
use crate::framework::Framework;
use crate::wait::eventually;
use k8s_openapi::api::core::v1::Node;
use kube::api::{Api, ListParams, ObjectList};
use std::time::Duration;
use tracing::debug;

/// Whether the node's Ready condition agrees with `expect_ready`.
pub fn check_node_status(node: &Node, expect_ready: bool) -> bool {
    node.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|c| c.type_ == "Ready" && (c.status == "True") == expect_ready)
        })
}

impl Framework {
    pub async fn node_list(&self) -> Result<ObjectList<Node>> {
        let api: Api<Node> = Api::all(self.client());
        Ok(api.list(&ListParams::default()).await?)
    }

    /// Poll until every node in the cluster reports Ready, or the timeout
    /// elapses. An empty cluster is trivially ready.
    pub async fn wait_cluster_node_ready(&self, timeout: Duration) -> Result<bool> {
        let ready = eventually(
            || async move {
                match self.node_list().await {
                    Ok(nodes) => {
                        let all_ready =
                            nodes.items.iter().all(|n| check_node_status(n, true));
                        if !all_ready {
                            debug!("cluster has nodes that are not ready yet");
                        }
                        all_ready
                    }
                    Err(_) => false,
                }
            },
            timeout,
            constants::POLL_INTERVAL,
        )
        .await;
        Ok(ready)
    }
}
