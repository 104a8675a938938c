// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test-support library for end-to-end Kubernetes suites. A [`Framework`]
//! wraps a cluster connection plus the environment description of the
//! cluster under test, and exposes typed create/get/delete/wait operations
//! for the resource kinds the suites exercise.
//!
//! ```no_run
//! use e2e_framework::{Framework, FrameworkConfig};
//! use std::time::Duration;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let framework = Framework::connect(FrameworkConfig::from_env()?).await?;
//! framework.create_namespace("e2e-test").await?;
//! framework
//!     .wait_namespace_pod_running("e2e-test", Duration::from_secs(120))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod framework;
pub mod resources;
pub mod test_utils;
pub mod types;
pub mod wait;

pub use config::FrameworkConfig;
pub use error::{FrameworkError, Result};
pub use framework::Framework;
pub use resources::ReplicaWorkload;
pub use wait::{eventually, poll_until, watch_until, DeletePolicy};
