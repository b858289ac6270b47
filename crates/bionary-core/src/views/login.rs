//! Login view

use crate::api::ApiClient;
use crate::route::Route;
use crate::session::TokenStore;
use crate::transport::ApiTransport;
use crate::types::Credentials;
use crate::ApiResult;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const SERVER_UNREACHABLE: &str = "Unable to reach server";
pub const SESSION_NOT_SAVED: &str = "Unable to save session";

/// Login form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a login attempt. Returns `None` while one is already running.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(Credentials::new(self.username.clone(), self.password.clone()))
    }

    /// Apply the login result. On success the token is persisted and the
    /// admin view is returned as the next destination.
    pub fn finish_submit<S: TokenStore + ?Sized>(
        &mut self,
        result: ApiResult<String>,
        store: &S,
    ) -> Option<Route> {
        self.loading = false;

        let token = match result {
            Ok(token) => token,
            Err(e) if e.is_unreachable() => {
                tracing::warn!(error = %e, "login request failed");
                self.error = Some(SERVER_UNREACHABLE.to_string());
                return None;
            }
            Err(e) => {
                tracing::info!(error = %e, "login rejected");
                self.error = Some(INVALID_CREDENTIALS.to_string());
                return None;
            }
        };

        if let Err(e) = store.save(&token) {
            tracing::error!(error = %e, "failed to persist session token");
            self.error = Some(SESSION_NOT_SAVED.to_string());
            return None;
        }

        tracing::info!(username = %self.username, "signed in");
        Some(Route::Admin)
    }

    /// Run a full login attempt against `api`.
    pub async fn submit<T, S>(&mut self, api: &ApiClient<T>, store: &S) -> Option<Route>
    where
        T: ApiTransport,
        S: TokenStore + ?Sized,
    {
        let credentials = self.begin_submit()?;
        let result = api.login(&credentials).await;
        self.finish_submit(result, store)
    }
}

/// Where to send a visitor of the login page who is already signed in.
pub fn redirect_if_signed_in<S: TokenStore + ?Sized>(store: &S) -> Option<Route> {
    store.is_signed_in().then_some(Route::Admin)
}
