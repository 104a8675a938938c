// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! NetworkAttachmentDefinition operations. Attachments share names with the
//! CNI configs they render, so creation goes through the guarded path to wait
//! out a terminating predecessor.

use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use crate::types::NetworkAttachmentDefinition;
use kube::api::{Api, ListParams, ObjectList};
use kube::ResourceExt;

impl Framework {
    pub async fn create_network_attachment(
        &self,
        nad: &NetworkAttachmentDefinition,
    ) -> Result<NetworkAttachmentDefinition> {
        let namespace = nad.namespace().ok_or(FrameworkError::WrongInput)?;
        let api: Api<NetworkAttachmentDefinition> = self.api(&namespace);
        self.create_guarded(&api, nad).await
    }

    pub async fn get_network_attachment(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<NetworkAttachmentDefinition> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn namespace_network_attachment_list(
        &self,
        namespace: &str,
    ) -> Result<ObjectList<NetworkAttachmentDefinition>> {
        self.list_namespaced(namespace, &ListParams::default()).await
    }

    pub async fn delete_network_attachment(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<NetworkAttachmentDefinition>(name, namespace)
            .await
    }
}
