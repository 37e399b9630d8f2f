use gitmirror::sync::{self, ProgressCallback, SyncOptions, SyncTotals};

use crate::config::Config;
use crate::progress::LoggingReporter;

pub(crate) async fn handle_sync(
    config: &Config,
    database_url: &str,
    per_page: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = gitmirror::connect_and_migrate(database_url).await?;

    let options = SyncOptions {
        per_page: per_page.unwrap_or(config.sync.per_page),
        ..SyncOptions::default()
    };

    let callback: ProgressCallback = Box::new(LoggingReporter::handle);
    let totals = sync::run(&db, &options, Some(&callback)).await?;

    print_totals(&totals);
    Ok(())
}

pub(crate) fn print_totals(totals: &SyncTotals) {
    println!("Synced:");
    println!("  organizations  {}", totals.organizations);
    println!("  repositories   {}", totals.repos);
    println!("  commits        {}", totals.commits);
    println!("  pull requests  {}", totals.pulls);
    println!("  issues         {}", totals.issues);
    println!("  changelogs     {}", totals.changelogs);
    println!("  users          {}", totals.users);
}
