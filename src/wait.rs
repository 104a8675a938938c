// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Condition-poll and watch-wait primitives.
//!
//! Every wait-style operation in this crate is one of three loops: re-check a
//! boolean predicate on a fixed tick ([`eventually`]), re-fetch a snapshot on
//! a fixed tick ([`poll_until`]), or classify events from a filtered watch
//! ([`watch_until`]). All three enforce a caller-supplied deadline and drop
//! their timer/subscription on every exit path.

use crate::error::{FrameworkError, Result};
use futures::{StreamExt, TryStreamExt};
use kube::api::{Api, WatchEvent, WatchParams};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::debug;

/// How a watch wait treats a `Deleted` event for a matching object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Fail the wait with [`FrameworkError::ResourceDeleted`].
    Fail,
    /// Keep waiting; the deleted object is not the one we are after.
    Ignore,
}

/// Re-evaluate `condition` once per `interval` until it returns true or
/// `wait_timeout` elapses. Returns whether the condition became true in time.
pub async fn eventually<F, Fut>(mut condition: F, wait_timeout: Duration, interval: Duration) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let wait = async {
        loop {
            if condition().await {
                return;
            }
            sleep(interval).await;
        }
    };
    timeout(wait_timeout, wait).await.is_ok()
}

/// Re-run `fetch` once per `interval` until it yields a value or
/// `wait_timeout` elapses. `Ok(None)` re-polls, `Err` propagates unchanged,
/// and the deadline maps to [`FrameworkError::Timeout`].
pub async fn poll_until<T, F, Fut>(
    mut fetch: F,
    wait_timeout: Duration,
    interval: Duration,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let wait = async {
        loop {
            match fetch().await? {
                Some(v) => return Ok(v),
                None => sleep(interval).await,
            }
        }
    };
    timeout(wait_timeout, wait)
        .await
        .unwrap_or(Err(FrameworkError::Timeout))
}

/// Watch objects matching `wp` until one satisfies `ready`, classifying each
/// event along the way: bookmarks are skipped, error events fail the wait,
/// deletions fail or are skipped per `on_delete`, and an exhausted stream
/// maps to [`FrameworkError::WatchClosed`].
pub async fn watch_until<K, P>(
    api: &Api<K>,
    wp: &WatchParams,
    wait_timeout: Duration,
    on_delete: DeletePolicy,
    mut ready: P,
) -> Result<K>
where
    K: Clone + DeserializeOwned + Debug,
    P: FnMut(&K) -> bool,
{
    let mut stream = api.watch(wp, "0").await?.boxed();
    let wait = async {
        loop {
            match stream.try_next().await? {
                Some(WatchEvent::Error(e)) => return Err(FrameworkError::ErrorEvent(e.message)),
                Some(WatchEvent::Deleted(obj)) => match on_delete {
                    DeletePolicy::Fail => return Err(FrameworkError::ResourceDeleted),
                    DeletePolicy::Ignore => debug!("ignoring deletion of {:?} while waiting", obj),
                },
                Some(WatchEvent::Bookmark(_)) => {}
                Some(WatchEvent::Added(obj)) | Some(WatchEvent::Modified(obj)) => {
                    if ready(&obj) {
                        return Ok(obj);
                    }
                }
                None => return Err(FrameworkError::WatchClosed),
            }
        }
    };
    timeout(wait_timeout, wait)
        .await
        .unwrap_or(Err(FrameworkError::Timeout))
}

/// Watch the single object named `name` until it satisfies `ready`.
/// A deletion of that object fails the wait.
pub async fn watch_object_until<K, P>(
    api: &Api<K>,
    name: &str,
    wait_timeout: Duration,
    ready: P,
) -> Result<K>
where
    K: Clone + DeserializeOwned + Debug,
    P: FnMut(&K) -> bool,
{
    let wp = WatchParams::default().fields(&format!("metadata.name={name}"));
    watch_until(api, &wp, wait_timeout, DeletePolicy::Fail, ready).await
}
