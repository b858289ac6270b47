//! Subcommand implementations
//!
//! Each command drives the same view controllers as the browser client, so
//! the terminal behaves like the web pages: the admin guard, the status
//! messages and the chat error string are shared.

use crate::cli::output::Output;
use crate::config::ClientConfig;
use crate::http::ReqwestTransport;
use crate::session::FileTokenStore;
use crate::{ClientError, Result};
use bionary_core::views::admin::{self, SubmitStart};
use bionary_core::{
    AdminForm, ApiClient, ApiTransport, ChatSearch, EventSubmission, LoginForm, Route, TokenStore,
};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Commands bound to one API endpoint and one token store
pub struct Client<T, S> {
    api: ApiClient<T>,
    store: S,
    out: Output,
}

/// Build the client the binary uses: `reqwest` plus the session file.
pub fn connect(
    config: &ClientConfig,
    out: Output,
) -> Result<Client<ReqwestTransport, FileTokenStore>> {
    let api = ApiClient::new(config.api_url.clone(), ReqwestTransport::new()?);
    let store = FileTokenStore::new(config.session_file.clone());
    Ok(Client::new(api, store, out))
}

impl<T: ApiTransport, S: TokenStore> Client<T, S> {
    pub fn new(api: ApiClient<T>, store: S, out: Output) -> Self {
        Self { api, store, out }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sign in and persist the token
    pub async fn login(&self, username: String, password: String) -> Result<()> {
        let mut form = LoginForm {
            username,
            password,
            ..LoginForm::default()
        };

        match form.submit(&self.api, &self.store).await {
            Some(Route::Admin) => {
                self.out.success(&format!("Signed in as {}", form.username));
                Ok(())
            }
            _ => Err(ClientError::Failed(
                form.error.unwrap_or_else(|| "Login failed".to_string()),
            )),
        }
    }

    /// Forget the session. Always succeeds.
    pub fn logout(&self) {
        admin::logout(&self.store);
        self.out.success("Signed out");
    }

    /// Submit a new event. Refuses to send anything without a session.
    pub async fn add_event(&self, event: EventSubmission) -> Result<()> {
        if admin::guard(&self.store).is_some() {
            return Err(ClientError::NotSignedIn);
        }

        let mut form = AdminForm {
            event,
            ..AdminForm::default()
        };
        let submission = match form.begin_submit(&self.store) {
            SubmitStart::Send(submission) => submission,
            SubmitStart::InFlight | SubmitStart::Redirect(_) => {
                return Err(ClientError::NotSignedIn)
            }
        };
        let name = &submission.event.name_of_event;
        self.out.info(&format!("Submitting \"{}\"...", name));

        let result = self
            .api
            .add_event(&submission.event, &submission.token)
            .await;
        form.finish_submit(&submission, result);

        match form.status {
            Some(status) if status.is_success() => {
                self.out.success(&status.message);
                Ok(())
            }
            Some(status) => Err(ClientError::Failed(status.message)),
            None => Err(ClientError::Failed(admin::SUBMISSION_FAILED.to_string())),
        }
    }

    /// Ask one question and print the answer
    pub async fn ask(&self, query: String) -> Result<()> {
        let mut search = ChatSearch {
            query,
            ..ChatSearch::default()
        };

        if !search.submit(&self.api).await {
            self.out.warning("Nothing to ask: the question is empty");
            return Ok(());
        }
        if search.failed {
            return Err(ClientError::Failed(search.answer));
        }

        println!("{}", search.answer);
        Ok(())
    }

    /// Interactive question loop. Ends on `quit`, `exit` or end of input;
    /// blank lines are skipped without a request.
    pub async fn chat<R, W>(&self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.out.prompt())?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(output)?;
                break;
            };
            let command = line.trim();
            if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("exit") {
                writeln!(output, "Goodbye!")?;
                break;
            }
            if command.is_empty() {
                continue;
            }

            let mut search = ChatSearch {
                query: line,
                ..ChatSearch::default()
            };
            if search.submit(&self.api).await {
                writeln!(output, "{}", self.out.answer(&search.answer))?;
            }
        }
        Ok(())
    }

    /// Print where requests go and whether a session is stored
    pub fn status(&self, config: &ClientConfig) {
        self.out.kv("API", self.api.base_url());
        let session_file = config.session_file.display().to_string();
        self.out.kv("Session file", &session_file);
        let signed_in = if self.store.is_signed_in() { "yes" } else { "no" };
        self.out.kv("Signed in", signed_in);
    }
}
