//! Activity Board CLI
//!
//! Terminal host for the activity board:
//! - List activities and rosters
//! - Sign up for an activity (prompts for an email)
//! - Unregister a participant (asks for confirmation)
//! - Submit the signup form non-interactively
//! - Print a default config file

use activity_board::config::{generate_default_config, Config};
use activity_board::{ActionOutcome, ActivityBoard, HttpActivityApi, TerminalDialogs, TerminalSurface};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse school activities and manage signups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Activities server URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/activity-board/config.toml, then ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities with their participants
    List,

    /// Sign up for an activity; prompts for your email
    Signup {
        /// Activity name
        activity: String,
    },

    /// Unregister a participant from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Sign up without prompting, like the page's signup form
    Submit {
        /// Activity name
        #[arg(short, long)]
        activity: String,
        /// Participant email
        #[arg(short, long)]
        email: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config);
    tracing::debug!(base_url = %config.api.base_url, "Activity Board v{}", env!("CARGO_PKG_VERSION"));

    let dialogs = match &cli.command {
        Commands::Unregister { yes, .. } => TerminalDialogs::stdio().assume_yes(*yes),
        _ => TerminalDialogs::stdio(),
    };

    let board = ActivityBoard::new(
        HttpActivityApi::new(config.api.base_url.clone()),
        dialogs,
        TerminalSurface::stdout(),
    )
    .with_message_hide(config.board.message_hide());

    let outcome = match cli.command {
        Commands::List => board.fetch_activities().await,
        Commands::Signup { activity } => board.signup_for_activity(&activity).await,
        Commands::Unregister {
            activity, email, ..
        } => board.unregister_participant(&activity, &email).await,
        Commands::Submit { activity, email } => board.submit_signup_form(&activity, &email).await,
        Commands::Config { output } => {
            write_default_config(output)?;
            ActionOutcome::Completed
        }
    };

    Ok(match outcome {
        ActionOutcome::Completed | ActionOutcome::Cancelled => ExitCode::SUCCESS,
        ActionOutcome::Failed => ExitCode::FAILURE,
    })
}

fn write_default_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Wrote default config to {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// Logs go to stderr so stdout only carries the board itself
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("activity_board={}", config.logging.level).into());
    let json = config.logging.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
