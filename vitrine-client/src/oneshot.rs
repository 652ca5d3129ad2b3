//! In-process transport
//!
//! Drives requests straight into an axum [`Router`] through the Tower
//! `oneshot` service call, with zero network overhead. Used by tests and
//! same-process server-client setups.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult, status_error};
use crate::transport::Transport;

/// Transport that calls an axum router in memory
#[derive(Debug, Clone)]
pub struct OneshotTransport {
    router: Arc<RwLock<Router>>,
}

impl OneshotTransport {
    /// Wrap an already-built router (`with_state` applied).
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(RwLock::new(router)),
        }
    }

    fn uri(path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            return path.to_string();
        }
        let pairs: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect();
        format!("{}?{}", path, pairs.join("&"))
    }

    fn build_request(method: http::Method, uri: &str, body: Body) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let body = self.execute_raw(request).await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON decode error: {}", e)))
    }

    async fn execute_raw(&self, request: Request<Body>) -> ClientResult<Vec<u8>> {
        let router = self.router.read().await.clone();

        let response = router
            .oneshot(request)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("oneshot call failed: {}", e)))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(status_error(status, &text));
        }
        Ok(bytes.to_vec())
    }
}

/// Percent-encode one query value; keeps unreserved characters as-is.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[async_trait]
impl Transport for OneshotTransport {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let uri = Self::uri(path, query);
        let request = Self::build_request(http::Method::GET, &uri, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = Self::build_request(http::Method::POST, path, Body::from(bytes))?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = Self::build_request(http::Method::POST, path, Body::empty())?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = Self::build_request(http::Method::PUT, path, Body::from(bytes))?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = Self::build_request(http::Method::DELETE, path, Body::empty())?;
        self.execute_raw(request).await?;
        Ok(())
    }
}
