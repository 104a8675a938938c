// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster event inspection. Events are matched by their involved object
//! coordinates, via field selectors server side.

use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use crate::wait::{watch_until, DeletePolicy};
use k8s_openapi::api::core::v1::Event;
use kube::api::{Api, ListParams, ObjectList, WatchParams};
use std::time::Duration;
use tracing::debug;

fn involved_object_selector(kind: &str, name: &str, namespace: &str) -> String {
    format!(
        "involvedObject.kind={kind},involvedObject.name={name},involvedObject.namespace={namespace}"
    )
}

impl Framework {
    /// List the events already recorded for one object.
    pub async fn event_list(
        &self,
        kind: &str,
        name: &str,
        namespace: &str,
    ) -> Result<ObjectList<Event>> {
        if kind.is_empty() || name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let api: Api<Event> = self.api(namespace);
        let lp =
            ListParams::default().fields(&involved_object_selector(kind, name, namespace));
        Ok(api.list(&lp).await?)
    }

    /// Watch events for one object until one arrives whose message contains
    /// `fragment`. Event objects come and go as the apiserver ages them out,
    /// so deletions are ignored rather than treated as failure.
    pub async fn wait_for_event(
        &self,
        kind: &str,
        name: &str,
        namespace: &str,
        fragment: &str,
        timeout: Duration,
    ) -> Result<Event> {
        if kind.is_empty() || name.is_empty() || namespace.is_empty() || fragment.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        let api: Api<Event> = self.api(namespace);
        let wp =
            WatchParams::default().fields(&involved_object_selector(kind, name, namespace));
        debug!(kind, name, namespace, fragment, "waiting for event");
        watch_until(&api, &wp, timeout, DeletePolicy::Ignore, |event: &Event| {
            event
                .message
                .as_deref()
                .is_some_and(|m| m.contains(fragment))
        })
        .await
    }
}
