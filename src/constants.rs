// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;

/// Environment variable names read by `FrameworkConfig::from_env`
pub mod env {
    pub const CLUSTER_NAME: &str = "E2E_CLUSTER_NAME";
    pub const KUBECONFIG_PATH: &str = "E2E_KUBECONFIG_PATH";
    pub const IPV4_ENABLED: &str = "E2E_IPV4_ENABLED";
    pub const IPV6_ENABLED: &str = "E2E_IPV6_ENABLED";
    pub const MULTUS_CNI_ENABLED: &str = "E2E_MULTUS_CNI_ENABLED";
    pub const KIND_CLUSTER_NODE_LIST: &str = "E2E_KIND_CLUSTER_NODE_LIST";
}

/// Tick between two evaluations of a readiness predicate
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How long a guarded create waits for a previous copy to finish deleting
pub const RESOURCE_DELETE_TIMEOUT: Duration = Duration::from_secs(60);
