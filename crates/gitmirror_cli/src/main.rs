//! gitmirror CLI - mirror GitHub organization data into a local database.

mod commands;
mod config;
mod progress;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gitmirror")]
#[command(version)]
#[command(about = "Mirror GitHub organization metadata into a local database")]
#[command(
    long_about = "gitmirror keeps a local, queryable copy of the GitHub metadata visible to a \
connected account: organizations, repositories, commits, pull requests, issues, \
issue events, and members. Connect once with a token, then resync on demand."
)]
#[command(after_long_help = r#"EXAMPLES
    Connect an account and run the initial sync:
        $ gitmirror connect --token ghp_...

    Resync everything:
        $ gitmirror sync

    Show the integration status and collection counts:
        $ gitmirror status

CONFIGURATION
    gitmirror reads configuration from:
      1. ~/.config/gitmirror/config.toml (or $XDG_CONFIG_HOME/gitmirror/config.toml)
      2. ./gitmirror.toml
      3. Environment variables (GITMIRROR_* prefix)
      4. .env file in the current directory

ENVIRONMENT VARIABLES
    GITMIRROR_DATABASE_URL     Database connection string (default: ~/.local/state/gitmirror/mirror.db)
    GITMIRROR_GITHUB_TOKEN     GitHub personal access token for `connect`
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Store a GitHub token as the active integration and run the first sync
    Connect {
        /// GitHub personal access token (falls back to config/env)
        #[arg(short, long, env = "GITMIRROR_GITHUB_TOKEN")]
        token: Option<String>,

        /// Skip the automatic sync after connecting
        #[arg(long)]
        no_sync: bool,
    },
    /// Resync all data from GitHub
    Sync {
        /// Page size for upstream listings (default from config or 100)
        #[arg(short, long)]
        per_page: Option<u32>,
    },
    /// Show the integration status and per-collection document counts
    Status,
    /// Delete all synced data (the credential is kept)
    Remove,
}

#[derive(Subcommand)]
enum MigrateAction {
    /// Apply all pending migrations
    Up,
    /// Rollback the last migration
    Down,
    /// Show migration status
    Status,
    /// Drop all tables and reapply migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gitmirror=info,gitmirror_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = config::Config::load();
    let cli = Cli::parse();

    let database_url = config
        .database_url()
        .expect("Failed to determine database URL - this should not happen");

    // Ensure the database directory exists for SQLite
    if database_url.starts_with("sqlite://") {
        let db_path = database_url.trim_start_matches("sqlite://");
        let db_path = db_path.split('?').next().unwrap_or(db_path);
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    match cli.command {
        Commands::Migrate { action } => {
            commands::migrate::handle_migrate(action, &database_url).await?;
        }
        Commands::Connect { token, no_sync } => {
            commands::connect::handle_connect(&config, &database_url, token, no_sync).await?;
        }
        Commands::Sync { per_page } => {
            commands::sync::handle_sync(&config, &database_url, per_page).await?;
        }
        Commands::Status => {
            commands::status::handle_status(&database_url).await?;
        }
        Commands::Remove => {
            commands::remove::handle_remove(&database_url).await?;
        }
    }

    Ok(())
}
