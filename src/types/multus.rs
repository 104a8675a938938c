// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// `NetworkAttachmentDefinition` from the CNI plumbing working group
/// (`k8s.cni.cncf.io/v1`). The spec carries the raw CNI config document.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "k8s.cni.cncf.io",
    version = "v1",
    kind = "NetworkAttachmentDefinition",
    plural = "network-attachment-definitions"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAttachmentDefinitionSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}
