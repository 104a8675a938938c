// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-resource operations on [`crate::framework::Framework`], grouped by
//! resource kind. Each module adds an `impl` block with the create, get,
//! delete, wait and list operations for one kind.

pub mod configmap;
pub mod daemonset;
pub mod deployment;
pub mod endpoint;
pub mod event;
pub mod job;
pub mod multus;
pub mod namespace;
pub mod node;
pub mod pod;
pub mod replicaset;
pub mod service;
pub mod serviceaccount;
pub mod spidermultus;
pub mod statefulset;
pub mod workload;

pub use node::check_node_status;
pub use workload::ReplicaWorkload;
