//! `reqwest` transport for the API client

use async_trait::async_trait;
use bionary_core::{ApiError, ApiReply, ApiResult, ApiTransport};
use reqwest::header::CONTENT_TYPE;

/// Sends API requests with a shared `reqwest` client.
///
/// No request timeout is set: a call waits as long as the server does.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bionary/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl ApiTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: String,
        bearer: Option<&str>,
    ) -> ApiResult<ApiReply> {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(ApiReply::new(status, body))
    }
}
