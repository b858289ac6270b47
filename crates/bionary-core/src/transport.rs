//! HTTP seam between the API client and a concrete HTTP stack

use crate::ApiResult;
use async_trait::async_trait;

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON `POST`.
///
/// Implementations only fail with [`crate::ApiError::Transport`] when no
/// response was received; non-2xx statuses are returned as replies.
/// Futures are not required to be `Send` so browser fetch can implement it.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn post_json(&self, url: &str, body: String, bearer: Option<&str>)
        -> ApiResult<ApiReply>;
}

#[async_trait(?Send)]
impl<T: ApiTransport + ?Sized> ApiTransport for &T {
    async fn post_json(
        &self,
        url: &str,
        body: String,
        bearer: Option<&str>,
    ) -> ApiResult<ApiReply> {
        (**self).post_json(url, body, bearer).await
    }
}

/// Join the configured base and an endpoint path, tolerating a trailing `/`.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
