//! Global application state

use bionary_core::{SessionError, TokenStore, DEFAULT_API_BASE, TOKEN_KEY};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

/// API base baked in at build time, e.g. `BIONARY_API_URL=https://... trunk build`
const API_BASE: Option<&str> = option_env!("BIONARY_API_URL");

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Mirror of the stored session token, for reactive views
    pub token: RwSignal<Option<String>>,
    /// API base URL
    pub api_base: &'static str,
}

impl AppState {
    pub fn new() -> Self {
        let state = Self {
            token: RwSignal::new(None),
            api_base: API_BASE.unwrap_or(DEFAULT_API_BASE),
        };
        state.token.set(state.load());
        state
    }

    /// Tracked variant of [`TokenStore::is_signed_in`] for use in views
    pub fn signed_in(&self) -> bool {
        self.token
            .with(|token| token.as_deref().is_some_and(|t| !t.is_empty()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn storage_error(e: wasm_bindgen::JsValue) -> SessionError {
    SessionError::Storage(format!("{e:?}"))
}

// The token is stored as a raw string under "token", not JSON-encoded.
impl TokenStore for AppState {
    fn load(&self) -> Option<String> {
        match LocalStorage::raw().get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = ?e, "localStorage read failed");
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        LocalStorage::raw()
            .set_item(TOKEN_KEY, token)
            .map_err(storage_error)?;
        self.token.set(Some(token.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let result = LocalStorage::raw()
            .remove_item(TOKEN_KEY)
            .map_err(storage_error);
        self.token.set(None);
        result
    }
}
