// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Job operations. A job is "ready" while its active pod count matches the
//! requested parallelism, and "finished" once a Complete or Failed condition
//! turns true.

use crate::constants;
use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use crate::wait::poll_until;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ObjectList;
use std::time::Duration;

/// True once the job carries a Complete or Failed condition with status True.
fn job_finished(job: &Job) -> bool {
    job.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|c| (c.type_ == "Complete" || c.type_ == "Failed") && c.status == "True")
        })
}

impl Framework {
    pub async fn create_job(&self, job: &Job) -> Result<Job> {
        self.create_namespaced(job).await
    }

    pub async fn get_job(&self, name: &str, namespace: &str) -> Result<Job> {
        self.get_namespaced(name, namespace).await
    }

    pub async fn delete_job(&self, name: &str, namespace: &str) -> Result<()> {
        self.delete_namespaced::<Job>(name, namespace).await
    }

    pub async fn wait_job_ready(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<Job> {
        self.wait_workload_ready(name, namespace, timeout).await
    }

    pub async fn job_pod_list(&self, job: &Job) -> Result<ObjectList<Pod>> {
        self.workload_pod_list(job).await
    }

    /// Poll the job until it reports a terminal Complete or Failed condition.
    pub async fn wait_job_finished(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<Job> {
        if name.is_empty() || namespace.is_empty() {
            return Err(FrameworkError::WrongInput);
        }
        poll_until(
            || async move {
                let job = self.get_job(name, namespace).await?;
                Ok(job_finished(&job).then_some(job))
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
    use crate::test_utils::{watch_added, watch_modified, MockService};

    fn job_json(name: &str, parallelism: i32, active: i32, condition: Option<&str>) -> String {
        let mut status = serde_json::json!({"active": active});
        if let Some(c) = condition {
            status["conditions"] = serde_json::json!([{"type": c, "status": "True"}]);
        }
        serde_json::json!({
            "apiVersion": "batch/v1",
            "kind": "Job",
            "metadata": {"name": name, "namespace": "default"},
            "spec": {
                "parallelism": parallelism,
                "template": {}
            },
            "status": status
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_wait_job_ready_needs_full_parallelism() {
        let mock = MockService::new().on_watch(
            "/apis/batch/v1/namespaces/default/jobs",
            &[
                watch_added(&job_json("batch", 2, 0, None)),
                watch_modified(&job_json("batch", 2, 2, None)),
            ],
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let job = f
            .wait_job_ready("batch", "default", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(job.status.unwrap().active, Some(2));
    }

    #[tokio::test]
    async fn test_wait_job_finished_on_complete_condition() {
        let mock = MockService::new().on_get_seq(
            "/apis/batch/v1/namespaces/default/jobs/batch",
            vec![
                (200, job_json("batch", 2, 2, None)),
                (200, job_json("batch", 2, 0, Some("Complete"))),
            ],
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let job = f
            .wait_job_finished("batch", "default", Duration::from_secs(10))
            .await
            .unwrap();
        assert!(job_finished(&job));
    }

    #[tokio::test]
    async fn test_wait_job_finished_times_out() {
        let mock = MockService::new().on_get(
            "/apis/batch/v1/namespaces/default/jobs/batch",
            200,
            &job_json("batch", 2, 2, None),
        );
        let f = Framework::new(mock.into_client(), FrameworkConfig::default());
        let err = f
            .wait_job_finished("batch", "default", Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Timeout));
    }

    #[test]
    fn test_job_finished_predicate() {
        let complete: Job =
            serde_json::from_str(&job_json("j", 1, 0, Some("Complete"))).unwrap();
        let failed: Job = serde_json::from_str(&job_json("j", 1, 0, Some("Failed"))).unwrap();
        let running: Job = serde_json::from_str(&job_json("j", 1, 1, None)).unwrap();
        assert!(job_finished(&complete));
        assert!(job_finished(&failed));
        assert!(!job_finished(&running));
    }
}
