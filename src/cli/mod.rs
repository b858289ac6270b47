//! CLI module for the Bionary client
//!
//! Provides command-line interface parsing for the `bionary` binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use bionary_core::{EventMode, EventSubmission};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bionary - club knowledge agent client
///
/// Ask questions about past club events, or sign in as an admin and
/// submit new events.
#[derive(Parser, Debug)]
#[command(
    name = "bionary",
    version,
    about = "Bionary - search past club events and submit new ones",
    long_about = "Terminal client for the Bionary club knowledge agent.\n\n\
                  Anyone can ask questions about past events. Adding events requires\n\
                  signing in first; the session token is kept in a local session file.",
    after_help = "EXAMPLES:\n    \
                  bionary ask \"What events covered AI?\"   # One question\n    \
                  bionary chat                              # Interactive search\n    \
                  bionary login -u admin                    # Sign in (prompts for password)\n    \
                  bionary add-event --name \"RAG 101\" --domain \"AI / ML\" \\\n        \
                  --date 2024-03-14 --description \"Intro to retrieval\"\n    \
                  bionary logout                            # Forget the session"
)]
pub struct Cli {
    /// Path to a configuration file (defaults to ./bionary.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the agent API (overrides config and BIONARY_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Where the session token is stored (overrides config and BIONARY_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in as an admin and store the session token
    Login {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Password (prompted for when omitted)
        #[arg(short, long, env = "BIONARY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Submit a new event (requires a session)
    AddEvent(EventArgs),

    /// Ask the agent a single question
    Ask {
        /// The question, sent as typed
        query: String,
    },

    /// Ask questions interactively until `quit` or `exit`
    Chat,

    /// Show the configured API and whether a session is stored
    Status,
}

/// Fields of a new event. Optional fields default to the blank form values.
#[derive(Args, Debug, Clone)]
pub struct EventArgs {
    /// Event name
    #[arg(long)]
    pub name: String,

    /// Domain, e.g. "AI / ML"
    #[arg(long)]
    pub domain: String,

    /// Date of the event (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Description and insights, used by the agent for search
    #[arg(long)]
    pub description: String,

    /// Time of the event
    #[arg(long, default_value = "")]
    pub time: String,

    /// Venue
    #[arg(long, default_value = "")]
    pub venue: String,

    /// Mode: offline, online or hybrid
    #[arg(long, default_value_t = EventMode::Offline)]
    pub mode: EventMode,

    /// Registration fee
    #[arg(long, default_value = "0")]
    pub fee: String,

    /// Collaborating organisations
    #[arg(long, default_value = "")]
    pub collaboration: String,

    /// Faculty coordinators
    #[arg(long, default_value = "")]
    pub faculty_coordinators: String,

    /// Student coordinators
    #[arg(long, default_value = "")]
    pub student_coordinators: String,

    /// Speakers
    #[arg(long, default_value = "")]
    pub speakers: String,

    /// Perks for attendees
    #[arg(long, default_value = "")]
    pub perks: String,
}

impl From<EventArgs> for EventSubmission {
    fn from(args: EventArgs) -> Self {
        EventSubmission {
            name_of_event: args.name,
            event_domain: args.domain,
            date_of_event: args.date,
            description_insights: args.description,
            time_of_event: args.time,
            faculty_coordinators: args.faculty_coordinators,
            student_coordinators: args.student_coordinators,
            venue: args.venue,
            mode_of_event: args.mode.as_str().to_string(),
            registration_fee: args.fee,
            speakers: args.speakers,
            perks: args.perks,
            collaboration: args.collaboration,
        }
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
