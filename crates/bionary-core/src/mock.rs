//! Recording transport for unit tests.

use crate::error::ApiError;
use crate::transport::{ApiReply, ApiTransport};
use crate::ApiResult;
use async_trait::async_trait;
use parking_lot::Mutex;

/// One request as it left the client.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub url: String,
    pub body: String,
    pub bearer: Option<String>,
}

impl SentRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Transport that records every request and answers with a canned reply,
/// or fails as if the server were down.
pub struct RecordingTransport {
    reply: Option<ApiReply>,
    sent: Mutex<Vec<SentRequest>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Some(ApiReply::new(status, body)),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SentRequest> {
        self.sent.lock().clone()
    }

    pub fn single_request(&self) -> SentRequest {
        let sent = self.requests();
        assert_eq!(sent.len(), 1, "expected exactly one request, got {:?}", sent);
        sent.into_iter().next().expect("one request")
    }
}

#[async_trait(?Send)]
impl ApiTransport for RecordingTransport {
    async fn post_json(
        &self,
        url: &str,
        body: String,
        bearer: Option<&str>,
    ) -> ApiResult<ApiReply> {
        self.sent.lock().push(SentRequest {
            url: url.to_string(),
            body,
            bearer: bearer.map(str::to_string),
        });
        self.reply
            .clone()
            .ok_or_else(|| ApiError::Transport("connection refused".to_string()))
    }
}
