// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ServiceAccount operations. The controller manager creates these
//! asynchronously for fresh namespaces, so the wait tolerates not-found.

use crate::constants;
use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use crate::wait::poll_until;
use k8s_openapi::api::core::v1::ServiceAccount;
use std::time::Duration;

impl Framework {
    pub async fn get_service_account(&self, name: &str, namespace: &str) -> Result<ServiceAccount> {
        self.get_namespaced(name, namespace).await
    }

    /// Poll until the service account exists.
    pub async fn wait_service_account_ready(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<ServiceAccount> {
        if name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        poll_until(
            || async move {
                match self.get_service_account(name, namespace).await {
                    Ok(sa) => Ok(Some(sa)),
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
