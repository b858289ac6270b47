//! # Bionary - terminal client
//!
//! Command-line access to the Bionary club knowledge agent:
//!
//! - **Search**: ask free-text questions about past club events, one at a
//!   time (`bionary ask`) or interactively (`bionary chat`)
//! - **Admin**: sign in (`bionary login`), submit new events
//!   (`bionary add-event`) and sign out (`bionary logout`)
//!
//! The request, session and message handling is shared with the browser
//! client through [`bionary_core`]; this crate adds a `reqwest` transport,
//! a session file and the CLI around them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod http;
pub mod session;

pub use commands::Client;
pub use config::ClientConfig;
pub use http::ReqwestTransport;
pub use session::FileTokenStore;

/// Error types for the terminal client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Not signed in. Run `bionary login` first.")]
    NotSignedIn,

    /// A request failed; carries the message the web client would show.
    #[error("{0}")]
    Failed(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
