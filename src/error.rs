// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameworkError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("input variable is not valid")]
    WrongInput,

    #[error("timed out waiting for condition")]
    Timeout,

    #[error("watch channel closed unexpectedly")]
    WatchClosed,

    #[error("received error event: {0}")]
    ErrorEvent(String),

    #[error("resource was deleted while waiting")]
    ResourceDeleted,

    #[error("a same {kind} {namespace}/{name} already exists")]
    AlreadyExists {
        kind: String,
        namespace: String,
        name: String,
    },
}

impl FrameworkError {
    /// True if the underlying API error is a 404 from the apiserver.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::Kube(kube::Error::Api(e)) if e.code == 404)
    }
}

pub(crate) fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(e) if e.code == 404)
}

pub type Result<T> = std::result::Result<T, FrameworkError>;
