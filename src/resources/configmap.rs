// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMap operations.

use crate::error::Result;
use crate::framework::Framework;
use k8s_openapi::api::core::v1::ConfigMap;

impl Framework {
    pub async fn create_configmap(&self, cm: &ConfigMap) -> Result<ConfigMap> {
        self.create_namespaced(cm).await
    }

    pub async fn get_configmap(&self, name: &str, namespace: &str) -> Result<ConfigMap> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_configmap(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<ConfigMap>(name, namespace).await
    }
}
