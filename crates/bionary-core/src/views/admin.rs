//! Admin view: token-gated event submission

use crate::api::ApiClient;
use crate::event::{EventField, EventSubmission};
use crate::route::Route;
use crate::session::TokenStore;
use crate::transport::ApiTransport;
use crate::ApiResult;
use std::fmt;

pub const SUBMISSION_FAILED: &str = "Submission failed";

/// Where to send a visitor of the admin view, checked before the form renders.
pub fn guard<S: TokenStore + ?Sized>(store: &S) -> Option<Route> {
    if store.is_signed_in() {
        None
    } else {
        tracing::debug!("no session token, redirecting to login");
        Some(Route::Login)
    }
}

/// Drop the session and go back to login. Never fails: a storage error is
/// logged and the redirect still happens.
pub fn logout<S: TokenStore + ?Sized>(store: &S) -> Route {
    match store.clear() {
        Ok(()) => tracing::info!("signed out"),
        Err(e) => tracing::warn!(error = %e, "failed to clear session token"),
    }
    Route::Login
}

/// Whether a banner reports success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Banner shown above the form after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// Snapshot of what one submission sends
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub event: EventSubmission,
    pub token: String,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("event", &self.event)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Outcome of [`AdminForm::begin_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Send this submission
    Send(Submission),
    /// A submission is already running
    InFlight,
    /// The session is gone; nothing is sent
    Redirect(Route),
}

/// Admin form state: the record being edited plus the status banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub event: EventSubmission,
    pub status: Option<Status>,
    pub loading: bool,
}

impl AdminForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: EventField, value: impl Into<String>) {
        self.event.set(field, value);
    }

    /// Change handler keyed by the input's `name` attribute.
    /// Unknown names are ignored and reported as `false`.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> bool {
        match EventField::from_name(name) {
            Some(field) => {
                self.set_field(field, value);
                true
            }
            None => {
                tracing::warn!(name, "ignoring change for unknown field");
                false
            }
        }
    }

    pub fn begin_submit<S: TokenStore + ?Sized>(&mut self, store: &S) -> SubmitStart {
        if self.loading {
            return SubmitStart::InFlight;
        }
        let Some(token) = store.current_token() else {
            tracing::warn!("session token disappeared before submission");
            return SubmitStart::Redirect(Route::Login);
        };

        self.status = None;
        self.loading = true;
        SubmitStart::Send(Submission {
            event: self.event.clone(),
            token,
        })
    }

    pub fn finish_submit(&mut self, submission: &Submission, result: ApiResult<()>) {
        self.loading = false;
        self.status = Some(match result {
            Ok(()) => {
                tracing::info!(event = %submission.event.name_of_event, "event submitted");
                Status::success(format!(
                    "Success! \"{}\" added.",
                    submission.event.name_of_event
                ))
            }
            Err(e) => {
                tracing::warn!(error = %e, "event submission failed");
                Status::error(e.detail().unwrap_or(SUBMISSION_FAILED))
            }
        });
    }

    /// Run a full submission. Returns a redirect when the session is gone.
    pub async fn submit<T, S>(&mut self, api: &ApiClient<T>, store: &S) -> Option<Route>
    where
        T: ApiTransport,
        S: TokenStore + ?Sized,
    {
        let submission = match self.begin_submit(store) {
            SubmitStart::Send(submission) => submission,
            SubmitStart::InFlight => return None,
            SubmitStart::Redirect(route) => return Some(route),
        };
        let result = api.add_event(&submission.event, &submission.token).await;
        self.finish_submit(&submission, result);
        None
    }
}
