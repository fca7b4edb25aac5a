//! reqwest Transport
//!
//! HTTP implementation of [`ActivityApi`] for the native host.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;

use super::client::ActivityApi;
use super::dto::{ErrorDetail, MessageResponse};
use super::error::{ApiError, ApiResult};
use super::paths;
use crate::catalog::ActivityCatalog;

/// reqwest-backed activities client
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: Client,
    base_url: String,
}

impl HttpActivityApi {
    /// Create a client for the server at `base_url` (e.g. "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest `Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        paths::join(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
        let url = self.url(paths::ACTIVITIES_PATH);
        tracing::debug!(url = %url, "Fetching activities");

        let response = self
            .client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(network_error)?;

        decode(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        let url = self.url(&paths::signup_path(activity, email));
        tracing::debug!(url = %url, "Sending signup");

        let response = self.client.post(&url).send().await.map_err(network_error)?;
        decode(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        let url = self.url(&paths::unregister_path(activity, email));
        tracing::debug!(url = %url, "Sending unregister");

        let response = self.client.delete(&url).send().await.map_err(network_error)?;
        decode(response).await
    }
}

/// Turn a response into either the decoded success body or a rejection
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if !status.is_success() {
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            detail: ErrorDetail::from_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn network_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Parse(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}
