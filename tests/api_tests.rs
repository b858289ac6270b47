//! End-to-end tests of the terminal client against a mocked agent API
//!
//! These tests use wiremock to stand in for the external server and a
//! temporary session file, exercising the real `reqwest` transport.

use bionary::cli::output::Output;
use bionary::{Client, ClientError, FileTokenStore, ReqwestTransport};
use bionary_core::{ApiClient, EventSubmission, TokenStore};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

struct Harness {
    server: MockServer,
    _dir: TempDir,
    client: Client<ReqwestTransport, FileTokenStore>,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileTokenStore::new(dir.path().join("session.json"));
    let api = ApiClient::new(server.uri(), ReqwestTransport::new().unwrap());
    let client = Client::new(api, store, Output::no_color());
    Harness {
        server,
        _dir: dir,
        client,
    }
}

fn sample_event() -> EventSubmission {
    EventSubmission {
        name_of_event: "RAG Workshop".into(),
        event_domain: "AI / ML".into(),
        date_of_event: "2024-03-14".into(),
        description_insights: "Hands-on retrieval pipelines".into(),
        venue: "Lab 3".into(),
        mode_of_event: "Hybrid".into(),
        registration_fee: "150".into(),
        collaboration: "IEEE CS".into(),
        ..EventSubmission::default()
    }
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_persists_token() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-1", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    h.client
        .login("admin".into(), "secret".into())
        .await
        .expect("login succeeds");

    assert_eq!(h.client.store().current_token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&h.server)
        .await;

    let err = h
        .client
        .login("admin".into(), "wrong".into())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid username or password");
    assert!(!h.client.store().is_signed_in());
}

#[tokio::test]
async fn test_login_unreachable_server() {
    let dir = TempDir::new().unwrap();
    let api = ApiClient::new("http://127.0.0.1:9", ReqwestTransport::new().unwrap());
    let client = Client::new(
        api,
        FileTokenStore::new(dir.path().join("session.json")),
        Output::no_color(),
    );

    let err = client
        .login("admin".into(), "secret".into())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unable to reach server");
}

// ============================================================================
// Add event
// ============================================================================

#[tokio::test]
async fn test_add_event_sends_record_with_bearer() {
    let h = harness().await;
    h.client.store().save("tok-7").unwrap();
    let event = sample_event();

    Mock::given(method("POST"))
        .and(path("/api/add-event"))
        .and(header("Authorization", "Bearer tok-7"))
        .and(body_json(serde_json::to_value(&event).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Event saved successfully."
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    h.client.add_event(event).await.expect("submission succeeds");
}

#[tokio::test]
async fn test_add_event_without_session_sends_nothing() {
    let h = harness().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    let err = h.client.add_event(sample_event()).await.unwrap_err();
    assert!(matches!(err, ClientError::NotSignedIn));
}

#[tokio::test]
async fn test_add_event_reports_server_detail() {
    let h = harness().await;
    h.client.store().save("tok-7").unwrap();
    Mock::given(method("POST"))
        .and(path("/api/add-event"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "Database connection failed"})),
        )
        .mount(&h.server)
        .await;

    let err = h.client.add_event(sample_event()).await.unwrap_err();
    assert_eq!(err.to_string(), "Database connection failed");
}

#[tokio::test]
async fn test_add_event_generic_message_for_plain_errors() {
    let h = harness().await;
    h.client.store().save("tok-7").unwrap();
    Mock::given(method("POST"))
        .and(path("/api/add-event"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&h.server)
        .await;

    let err = h.client.add_event(sample_event()).await.unwrap_err();
    assert_eq!(err.to_string(), "Submission failed");
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_clears_session() {
    let h = harness().await;
    h.client.store().save("tok-7").unwrap();

    h.client.logout();
    assert!(!h.client.store().is_signed_in());

    // Logging out twice is fine
    h.client.logout();
    assert!(!h.client.store().is_signed_in());
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_ask_posts_query() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"query": "What events covered AI?"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"answer": "RAG Workshop, 2024."})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    h.client
        .ask("What events covered AI?".into())
        .await
        .expect("ask succeeds");
}

#[tokio::test]
async fn test_ask_empty_query_never_requests() {
    let h = harness().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    h.client.ask(String::new()).await.expect("empty query is a no-op");
}

#[tokio::test]
async fn test_ask_whitespace_query_is_sent_as_typed() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"query": "   "})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"answer": "Ask me something."})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    h.client.ask("   ".into()).await.expect("whitespace query is sent");
}

#[tokio::test]
async fn test_ask_failure_returns_agent_error() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&h.server)
        .await;

    let err = h.client.ask("hi".into()).await.unwrap_err();
    assert_eq!(err.to_string(), "Error connecting to the agent.");
}

#[tokio::test]
async fn test_chat_loop_skips_blanks_and_stops_on_exit() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"query": "What is RAG?"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"answer": "Retrieval augmented generation."})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let input: &[u8] = b"What is RAG?\n\n   \nEXIT\nnever sent\n";
    let mut output = Vec::new();
    h.client.chat(input, &mut output).await.unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Agent: Retrieval augmented generation."));
    assert!(transcript.contains("Goodbye!"));
    assert!(!transcript.contains("never sent"));
}

#[tokio::test]
async fn test_chat_loop_ends_at_eof() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&h.server)
        .await;

    let input: &[u8] = b"anyone there?";
    let mut output = Vec::new();
    h.client.chat(input, &mut output).await.unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Agent: Error connecting to the agent."));
}
