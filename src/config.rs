// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Framework configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct FrameworkConfig {
    /// Name of the cluster under test
    pub cluster_name: String,
    /// Path to a kubeconfig file; when unset the client infers its config
    pub kubeconfig_path: Option<String>,
    /// Whether pods are expected to receive an IPv4 address
    pub ipv4_enabled: bool,
    /// Whether pods are expected to receive an IPv6 address
    pub ipv6_enabled: bool,
    /// Whether the multus CNI is installed in the cluster
    pub multus_enabled: bool,
    /// Node names of the cluster under test
    pub node_names: Vec<String>,
    /// How long a guarded create waits for a previous copy to finish deleting
    pub resource_delete_timeout: Duration,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        FrameworkConfig {
            cluster_name: String::new(),
            kubeconfig_path: None,
            ipv4_enabled: false,
            ipv6_enabled: false,
            multus_enabled: false,
            node_names: Vec::new(),
            resource_delete_timeout: constants::RESOURCE_DELETE_TIMEOUT,
        }
    }
}

impl FrameworkConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let cluster_name = env::var(constants::env::CLUSTER_NAME)
            .context("E2E_CLUSTER_NAME environment variable not set")?;
        let kubeconfig_path = env::var(constants::env::KUBECONFIG_PATH)
            .ok()
            .filter(|p| !p.is_empty());
        let node_names = env::var(constants::env::KIND_CLUSTER_NODE_LIST)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(FrameworkConfig {
            cluster_name,
            kubeconfig_path,
            ipv4_enabled: env_flag(constants::env::IPV4_ENABLED),
            ipv6_enabled: env_flag(constants::env::IPV6_ENABLED),
            multus_enabled: env_flag(constants::env::MULTUS_CNI_ENABLED),
            node_names,
            resource_delete_timeout: constants::RESOURCE_DELETE_TIMEOUT,
        })
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .unwrap_or_default()
        .parse()
        .unwrap_or(false)
}
