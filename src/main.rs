//! Bionary CLI entry point
//!
//! - `bionary ask <query>` - one question
//! - `bionary chat` - interactive questions
//! - `bionary login` / `bionary logout` - manage the admin session
//! - `bionary add-event ...` - submit a new event
//! - `bionary status` - show configuration and session state

use anyhow::Context;
use bionary::cli::{output::Output, Cli, Commands};
use bionary::{commands, ClientConfig};
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let out = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match run(cli, out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "bionary=info,bionary_core=info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

async fn run(cli: Cli, out: Output) -> anyhow::Result<()> {
    let config = ClientConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.api_url, cli.session_file);

    let client = commands::connect(&config, out).context("failed to set up HTTP client")?;

    match cli.command {
        Commands::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()?,
            };
            client.login(username, password).await?;
        }
        Commands::Logout => client.logout(),
        Commands::AddEvent(args) => client.add_event(args.into()).await?,
        Commands::Ask { query } => client.ask(query).await?,
        Commands::Chat => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            client.chat(stdin, &mut stdout).await?;
        }
        Commands::Status => client.status(&config),
    }

    Ok(())
}
