//! Browser transport for the agent API

use crate::state::AppState;
use async_trait::async_trait;
use bionary_core::{ApiClient, ApiError, ApiReply, ApiResult, ApiTransport};
use gloo_net::http::Request;

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl ApiTransport for GlooTransport {
    async fn post_json(
        &self,
        url: &str,
        body: String,
        bearer: Option<&str>,
    ) -> ApiResult<ApiReply> {
        let req = Request::post(url).header("Content-Type", "application/json");

        let req = if let Some(token) = bearer {
            req.header("Authorization", &format!("Bearer {}", token))
        } else {
            req
        };

        let resp = req
            .body(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(ApiReply::new(status, body))
    }
}

/// API client for the configured base URL
pub fn client(state: &AppState) -> ApiClient<GlooTransport> {
    ApiClient::new(state.api_base, GlooTransport)
}
