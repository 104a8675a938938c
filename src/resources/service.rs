// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service operations.

use crate::constants;
use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use crate::wait::poll_until;
use k8s_openapi::api::core::v1::Service;
use std::time::Duration;

impl Framework {
    pub async fn create_service(&self, service: &Service) -> Result<Service> {
        self.create_namespaced(service).await
    }

    pub async fn get_service(&self, name: &str, namespace: &str) -> Result<Service> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_service(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<Service>(name, namespace).await
    }

    /// Poll until the service exists. Not-found keeps polling; any other
    /// store error propagates unchanged.
    pub async fn wait_service_ready(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<Service> {
        if name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        poll_until(
            || async move {
                match self.get_service(name, namespace).await {
                    Ok(svc) => Ok(Some(svc)),
                    Err(e) if e.is_not_found() => Ok(None),
                    Err(e) => Err(e),
                }
            },
            timeout,
            constants::POLL_INTERVAL,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameworkConfig;
    use crate::test_utils::{not_found_json, MockService};
    use kube::ResourceExt;

    fn service_json(name: &str) -> String {
        serde_json::json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": {"name": name, "namespace": "default"},
            "spec": {"clusterIP": "10.96.0.10"}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_wait_service_ready_tolerates_not_found() {
        let mock = MockService::new().on_get_seq(
            "/api/v1/namespaces/default/services/web",
            vec![
                (404, not_found_json("services", "web")),
                (200, service_json("web")),
            ],
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let svc = f
            .wait_service_ready("web", "default", Duration::from_secs(10))
            .await
            .unwrap();
        assert_eq!(svc.name_any(), "web");
    }

    #[tokio::test]
    async fn test_wait_service_ready_validates_input() {
        let f = Framework::new(MockService::new().into_client(), FrameworkConfig::default());
        let err = f
            .wait_service_ready("", "default", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::WrongInput));
    }
}
