//! HTTP API Client
//!
//! [`ActivityApi`] over gloo-net for the browser host.

use activity_board::api::paths;
use activity_board::{ActivityApi, ActivityCatalog, ApiError, ApiResult, ErrorDetail, MessageResponse};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Local storage key for an API base override
pub const API_BASE_KEY: &str = "activity_board_api_url";

/// Get the API base URL from local storage. Empty means same origin.
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// gloo-net backed activities client
#[derive(Debug, Clone, Default)]
pub struct GlooActivityApi {
    base_url: String,
}

impl GlooActivityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        paths::join(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ActivityApi for GlooActivityApi {
    async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
        // The roster must reflect the server, never a cached copy.
        let response = Request::get(&self.url(paths::ACTIVITIES_PATH))
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(network_error)?;

        decode(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        let response = Request::post(&self.url(&paths::signup_path(activity, email)))
            .send()
            .await
            .map_err(network_error)?;

        decode(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        let response = Request::delete(&self.url(&paths::unregister_path(activity, email)))
            .send()
            .await
            .map_err(network_error)?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if !response.ok() {
        return Err(ApiError::Rejected {
            status,
            detail: ErrorDetail::from_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn network_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}
