// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace operations. Namespaces are cluster scoped, and a deleted
//! namespace lingers in Terminating while its contents drain, so creation
//! goes through the guarded path.

use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use k8s_openapi::api::core::v1::Namespace;
use kube::api::{Api, DeleteParams, ObjectMeta};
use tracing::debug;

impl Framework {
    /// Create a namespace with the given name, waiting out a previous
    /// incarnation that is still terminating.
    pub async fn create_namespace(&self, name: &str) -> Result<Namespace> {
        if name.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let ns = Namespace {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let api: Api<Namespace> = Api::all(self.client());
        debug!(namespace = %name, "creating namespace");
        self.create_guarded(&api, &ns).await
    }

    pub async fn get_namespace(&self, name: &str) -> Result<Namespace> {
        if name.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let api: Api<Namespace> = Api::all(self.client());
        Ok(api.get(name).await?)
    }

    pub async fn delete_namespace(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let api: Api<Namespace> = Api::all(self.client());
        debug!(namespace = %name, "deleting namespace");
        api.delete(name, &DeleteParams::default()).await?;
        Ok(())
    }
}
