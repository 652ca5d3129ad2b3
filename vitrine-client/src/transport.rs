//! Transport seam for the API client
//!
//! [`Transport`] abstracts how requests reach the backend: over the network
//! ([`NetworkTransport`]) or directly into an in-process router
//! ([`OneshotTransport`](crate::OneshotTransport)). Resource operations are
//! written once against the trait.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, status_error};

/// HTTP verb helpers the resource operations are built on.
///
/// `query` pairs are appended to the URL; bodies are JSON with the fixed
/// `application/json` content type. `delete` discards the body because the
/// backend answers deletions with 204.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn delete(&self, path: &str) -> ClientResult<()>;
}

/// Network transport over reqwest
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    client: Client,
    api_root: String,
}

impl NetworkTransport {
    /// Build a transport from configuration; every request carries the JSON
    /// content type and is bounded by the configured timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_root: config.api_root(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = %status, "request failed");
            return Err(status_error(status, &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON decode error: {}", e)))
    }
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "GET", url = %url, "sending request");
        let response = self.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "sending request");
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "sending request");
        let response = self.client.post(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "PUT", url = %url, "sending request");
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", url = %url, "sending request");
        let response = self.client.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(status = %status, "request failed");
            return Err(status_error(status, &text));
        }
        Ok(())
    }
}
