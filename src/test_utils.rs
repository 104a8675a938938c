// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request
/// method and path. Responses can be a fixed answer, a consumed-in-order
/// sequence (the last entry repeats), or a newline-delimited watch stream.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), VecDeque<(u16, String)>>>>,
    watches: Arc<Mutex<HashMap<String, String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            watches: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("GET", path, vec![(status, body.to_string())]);
        self
    }

    /// Add a sequence of GET responses for the exact path, served in order;
    /// the last one repeats once the sequence is exhausted.
    pub fn on_get_seq(self, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.insert("GET", path, responses);
        self
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("POST", path, vec![(status, body.to_string())]);
        self
    }

    /// Add a response for DELETE requests matching the exact path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("DELETE", path, vec![(status, body.to_string())]);
        self
    }

    /// Add a response for PATCH requests matching the exact path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("PATCH", path, vec![(status, body.to_string())]);
        self
    }

    /// Serve the given watch events (one JSON object per line) for watch
    /// requests against the exact path. The stream ends after the last event.
    pub fn on_watch(self, path: &str, events: &[String]) -> Self {
        self.watches
            .lock()
            .unwrap()
            .insert(path.to_string(), events.join("\n"));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn insert(&self, method: &str, path: &str, responses: Vec<(u16, String)>) {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), responses.into());
    }

    fn find_response(&self, method: &str, path: &str, query: &str) -> Option<(u16, String)> {
        if method == "GET" && query.contains("watch=true") {
            return self
                .watches
                .lock()
                .unwrap()
                .get(path)
                .map(|body| (200, body.clone()));
        }

        let mut responses = self.responses.lock().unwrap();

        // Exact match first, consuming one entry of a sequence.
        if let Some(seq) = responses.get_mut(&(method.to_string(), path.to_string())) {
            if seq.len() > 1 {
                return seq.pop_front();
            }
            return seq.front().cloned();
        }

        // Then prefix match for paths like /api/v1/namespaces/foo
        for ((m, p), seq) in responses.iter() {
            if m == method && path.starts_with(p) {
                return seq.front().cloned();
            }
        }

        None
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().unwrap_or_default().to_string();

        let response = self.find_response(&method, &path, &query);

        Box::pin(async move {
            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Install a subscriber so failing tests show the wait/watch debug logs.
/// Safe to call from every test; only the first call wins.
#[cfg(test)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Wrap an object JSON document as an ADDED watch event line
pub fn watch_added(object: &str) -> String {
    format!(r#"{{"type":"ADDED","object":{object}}}"#)
}

/// Wrap an object JSON document as a MODIFIED watch event line
pub fn watch_modified(object: &str) -> String {
    format!(r#"{{"type":"MODIFIED","object":{object}}}"#)
}

/// Wrap an object JSON document as a DELETED watch event line
pub fn watch_deleted(object: &str) -> String {
    format!(r#"{{"type":"DELETED","object":{object}}}"#)
}

/// Build an ERROR watch event line with the given message
pub fn watch_error(message: &str) -> String {
    serde_json::json!({
        "type": "ERROR",
        "object": {
            "kind": "Status",
            "apiVersion": "v1",
            "status": "Failure",
            "message": message,
            "reason": "InternalError",
            "code": 500
        }
    })
    .to_string()
}

/// Create a minimal pod JSON response in the given phase
pub fn pod_json(name: &str, namespace: &str, phase: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "status": {
            "phase": phase
        }
    })
    .to_string()
}

/// Create a pod JSON response carrying the given pod IPs
pub fn pod_json_with_ips(name: &str, namespace: &str, ips: &[&str]) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "status": {
            "phase": "Running",
            "podIPs": ips.iter().map(|ip| serde_json::json!({"ip": ip})).collect::<Vec<_>>()
        }
    })
    .to_string()
}

/// Create a pod JSON response marked for deletion
pub fn terminating_pod_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid",
            "deletionTimestamp": "2026-01-01T00:00:00Z",
            "finalizers": ["example.com/block"]
        },
        "status": {
            "phase": "Running"
        }
    })
    .to_string()
}

/// Wrap item documents into a list response of the given kind
pub fn list_json(api_version: &str, kind: &str, items: &[String]) -> String {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|i| serde_json::from_str(i).expect("invalid item json"))
        .collect();
    serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {"resourceVersion": "1"},
        "items": items
    })
    .to_string()
}

/// Create a success Status response, e.g. for delete calls
pub fn status_success_json() -> String {
    r#"{"kind":"Status","apiVersion":"v1","status":"Success"}"#.to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}
