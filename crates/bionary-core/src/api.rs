//! API client for the external Bionary agent server

use crate::error::ApiError;
use crate::event::EventSubmission;
use crate::transport::{endpoint_url, ApiReply, ApiTransport};
use crate::types::{ChatRequest, ChatResponse, Credentials, ErrorDetail, LoginResponse};
use crate::ApiResult;
use serde::Serialize;

pub const LOGIN_PATH: &str = "/auth/login";
pub const ADD_EVENT_PATH: &str = "/api/add-event";
pub const CHAT_PATH: &str = "/api/chat";

/// Typed calls against the three endpoints, over any [`ApiTransport`].
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: ApiTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> ApiResult<ApiReply> {
        let url = endpoint_url(&self.base_url, path);
        let body = serde_json::to_string(body)?;
        tracing::debug!(%url, authenticated = bearer.is_some(), "POST");
        self.transport.post_json(&url, body, bearer).await
    }

    /// Exchange credentials for a bearer token.
    ///
    /// Only the presence of `access_token` decides success; the status code
    /// is consulted just to pick the error variant.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let reply = self.post(LOGIN_PATH, credentials, None).await?;
        let parsed: LoginResponse =
            serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))?;

        match parsed.access_token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(token),
            None if !reply.is_success() => Err(status_error(&reply)),
            None => Err(ApiError::MissingField("access_token")),
        }
    }

    /// Submit a new event with the admin's bearer token.
    /// The success body is ignored.
    pub async fn add_event(&self, event: &EventSubmission, token: &str) -> ApiResult<()> {
        let reply = self.post(ADD_EVENT_PATH, event, Some(token)).await?;
        if reply.is_success() {
            Ok(())
        } else {
            Err(status_error(&reply))
        }
    }

    /// Ask the agent a question and return its answer text unmodified.
    pub async fn chat(&self, query: &str) -> ApiResult<String> {
        let request = ChatRequest {
            query: query.to_string(),
        };
        let reply = self.post(CHAT_PATH, &request, None).await?;
        if !reply.is_success() {
            return Err(status_error(&reply));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        parsed.answer.ok_or(ApiError::MissingField("answer"))
    }
}

fn status_error(reply: &ApiReply) -> ApiError {
    ApiError::Status {
        status: reply.status,
        detail: ErrorDetail::from_body(&reply.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingTransport;
    use serde_json::json;

    fn client(transport: &RecordingTransport) -> ApiClient<&RecordingTransport> {
        ApiClient::new("http://agent.test/", transport)
    }

    #[tokio::test]
    async fn login_posts_credentials_and_returns_token() {
        let transport =
            RecordingTransport::replying(200, r#"{"access_token":"tok-1","token_type":"bearer"}"#);
        let token = client(&transport)
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap();

        assert_eq!(token, "tok-1");
        let sent = transport.single_request();
        assert_eq!(sent.url, "http://agent.test/auth/login");
        assert_eq!(sent.json(), json!({"username": "admin", "password": "secret"}));
        assert_eq!(sent.bearer, None);
    }

    #[tokio::test]
    async fn login_without_token_is_rejected() {
        let transport = RecordingTransport::replying(401, r#"{"detail":"Invalid credentials"}"#);
        let err = client(&transport)
            .login(&Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
        assert_eq!(err.detail(), Some("Invalid credentials"));

        let transport = RecordingTransport::replying(200, r#"{"access_token":""}"#);
        let err = client(&transport)
            .login(&Credentials::new("admin", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField("access_token")));
    }

    #[tokio::test]
    async fn login_with_html_body_is_a_decode_error() {
        let transport = RecordingTransport::replying(502, "<html>Bad Gateway</html>");
        let err = client(&transport)
            .login(&Credentials::new("admin", "pw"))
            .await
            .unwrap_err();
        assert!(err.is_unreachable());
    }

    #[tokio::test]
    async fn add_event_sends_record_and_bearer() {
        let transport = RecordingTransport::replying(200, r#"{"status":"success"}"#);
        let mut event = EventSubmission::default();
        event.name_of_event = "RAG Workshop".into();
        event.registration_fee = "150".into();

        client(&transport).add_event(&event, "tok-9").await.unwrap();

        let sent = transport.single_request();
        assert_eq!(sent.url, "http://agent.test/api/add-event");
        assert_eq!(sent.bearer.as_deref(), Some("tok-9"));
        assert_eq!(sent.json(), serde_json::to_value(&event).unwrap());
    }

    #[tokio::test]
    async fn add_event_surfaces_server_detail() {
        let transport =
            RecordingTransport::replying(500, r#"{"detail":"Database connection failed"}"#);
        let err = client(&transport)
            .add_event(&EventSubmission::default(), "tok")
            .await
            .unwrap_err();
        assert_eq!(err.detail(), Some("Database connection failed"));
    }

    #[tokio::test]
    async fn chat_returns_answer_verbatim() {
        let transport =
            RecordingTransport::replying(200, r#"{"answer":"  Two events:\n- RAG 101\n"}"#);
        let answer = client(&transport).chat("RAG?").await.unwrap();
        assert_eq!(answer, "  Two events:\n- RAG 101\n");
        assert_eq!(transport.single_request().json(), json!({"query": "RAG?"}));
    }

    #[tokio::test]
    async fn chat_without_answer_field_fails() {
        let transport = RecordingTransport::replying(200, r#"{"response":"wrong key"}"#);
        let err = client(&transport).chat("hi").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField("answer")));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let transport = RecordingTransport::unreachable();
        let err = client(&transport).chat("hi").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
