// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource definitions for the network-attachment CRDs the framework
//! manages alongside the built-in workload kinds.

pub mod multus;
pub mod spidermultus;

pub use multus::NetworkAttachmentDefinition;
pub use spidermultus::SpiderMultusConfig;
