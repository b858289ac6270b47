//! Client configuration
//!
//! Layers, lowest to highest priority:
//! 1. built-in defaults
//! 2. `bionary.toml` in the working directory, or the file passed with `--config`
//! 3. `BIONARY_*` environment variables (`.env` is loaded first)
//! 4. command-line overrides

use bionary_core::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the agent API
    pub api_url: String,

    /// File holding the session token
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_BASE.to_string(),
            session_file: default_session_file(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// An explicitly given file must exist; the implicit `bionary.toml` is optional.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let mut builder = ::config::Config::builder()
            .set_default("api_url", defaults.api_url)?
            .set_default(
                "session_file",
                defaults.session_file.to_string_lossy().into_owned(),
            )?;

        builder = match path {
            Some(path) => builder.add_source(::config::File::from(path).required(true)),
            None => builder.add_source(::config::File::with_name("bionary").required(false)),
        };

        let config: ClientConfig = builder
            .add_source(::config::Environment::with_prefix("BIONARY"))
            .build()?
            .try_deserialize()?;

        tracing::debug!(
            api_url = %config.api_url,
            session_file = %config.session_file.display(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        session_file: Option<PathBuf>,
    ) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(session_file) = session_file {
            self.session_file = session_file;
        }
        self
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// `~/.bionary/session.json`, or `./.bionary/session.json` without a home directory
pub fn default_session_file() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bionary")
        .join("session.json")
}
