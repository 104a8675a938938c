// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// `SpiderMultusConfig` (`spiderpool.spidernet.io/v2beta1`): a higher-level
/// template from which the IPAM controller renders a
/// `NetworkAttachmentDefinition`.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "spiderpool.spidernet.io",
    version = "v2beta1",
    kind = "SpiderMultusConfig",
    plural = "spidermultusconfigs"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct SpiderMultusConfigSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cni_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_coordinator: Option<bool>,
}
