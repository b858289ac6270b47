//! # bionary-core
//!
//! Shared building blocks for the Bionary clients: the browser front end
//! (`bionary-ui`) and the terminal client (`bionary`).
//!
//! The crate knows nothing about a particular UI toolkit or HTTP stack.
//! Clients plug in two seams:
//!
//! - [`ApiTransport`]: sends one JSON `POST` and hands back the status and
//!   raw body (`gloo-net` in the browser, `reqwest` in the terminal).
//! - [`TokenStore`]: persists the bearer token under the `token` key
//!   (`localStorage` in the browser, a session file in the terminal).
//!
//! On top of those seams sit the [`ApiClient`] and the three view
//! controllers in [`views`]: [`LoginForm`], [`AdminForm`] and
//! [`ChatSearch`]. Each controller is a small state machine with a
//! `begin_submit` / `finish_submit` pair, so a reactive UI can flip its
//! loading flag before awaiting the request, and an `async fn submit`
//! that runs both halves for callers that can hold `&mut self` across the
//! await.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bionary_core::{ApiClient, ChatSearch};
//!
//! let api = ApiClient::new("http://127.0.0.1:8000", transport);
//! let mut chat = ChatSearch::default();
//! chat.query = "What events covered AI?".into();
//! chat.submit(&api).await;
//! println!("{}", chat.answer);
//! ```

pub mod api;
pub mod error;
pub mod event;
pub mod route;
pub mod session;
pub mod transport;
pub mod types;
pub mod views;

#[cfg(test)]
pub(crate) mod mock;

pub use api::{ApiClient, CHAT_PATH, ADD_EVENT_PATH, LOGIN_PATH};
pub use error::{ApiError, SessionError};
pub use event::{EventField, EventMode, EventSection, EventSubmission, InputKind};
pub use route::Route;
pub use session::{MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use transport::{endpoint_url, ApiReply, ApiTransport};
pub use types::{ChatRequest, ChatResponse, Credentials, ErrorDetail, LoginResponse};
pub use views::{
    admin::{AdminForm, Status, StatusKind, SubmitStart, Submission},
    chat::ChatSearch,
    login::LoginForm,
};

/// Result type alias for API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// API base used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
