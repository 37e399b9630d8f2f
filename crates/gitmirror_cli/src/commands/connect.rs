use gitmirror::sync::{self, ProgressCallback, SyncOptions};
use gitmirror::{integration, GitHubClient};

use crate::config::Config;
use crate::progress::LoggingReporter;

pub(crate) async fn handle_connect(
    config: &Config,
    database_url: &str,
    token: Option<String>,
    no_sync: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(token) = token.or_else(|| config.github_token()) else {
        return Err("No GitHub token provided. Pass --token, set GITMIRROR_GITHUB_TOKEN, \
             or add it to the config file."
            .into());
    };

    let db = gitmirror::connect_and_migrate(database_url).await?;

    let client = GitHubClient::new(&token)?;
    let profile = client.authenticated_user().await?;
    let record = integration::activate(&db, &profile, &token).await?;
    println!("Connected as {} (GitHub id {}).", record.username, record.github_user_id);

    if no_sync {
        return Ok(());
    }

    println!("Running initial sync...");
    let callback: ProgressCallback = Box::new(LoggingReporter::handle);
    let totals = sync::run_with_client(&client, &db, &SyncOptions::default(), Some(&callback)).await?;

    super::sync::print_totals(&totals);
    Ok(())
}
