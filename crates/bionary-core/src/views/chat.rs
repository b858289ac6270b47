//! Chat/search view

use crate::api::ApiClient;
use crate::transport::ApiTransport;
use crate::ApiResult;

pub const AGENT_UNREACHABLE: &str = "Error connecting to the agent.";

/// Search page state: one question, one answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSearch {
    pub query: String,
    pub answer: String,
    pub loading: bool,
    /// Whether `answer` holds the failure message rather than a reply
    pub failed: bool,
}

impl ChatSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search. Returns the query to send exactly as typed, or `None`
    /// for an empty query or while a search is running.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.loading || self.query.is_empty() {
            return None;
        }
        self.loading = true;
        self.failed = false;
        self.answer.clear();
        Some(self.query.clone())
    }

    pub fn finish_submit(&mut self, result: ApiResult<String>) {
        self.loading = false;
        match result {
            Ok(answer) => self.answer = answer,
            Err(e) => {
                tracing::error!(error = %e, "chat request failed");
                self.answer = AGENT_UNREACHABLE.to_string();
                self.failed = true;
            }
        }
    }

    /// Run a full search. Returns whether a request was issued.
    pub async fn submit<T: ApiTransport>(&mut self, api: &ApiClient<T>) -> bool {
        let Some(query) = self.begin_submit() else {
            return false;
        };
        let result = api.chat(&query).await;
        self.finish_submit(result);
        true
    }
}
