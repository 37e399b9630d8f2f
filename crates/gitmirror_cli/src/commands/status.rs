use gitmirror::{integration, store};

pub(crate) async fn handle_status(database_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = gitmirror::connect_and_migrate(database_url).await?;

    match integration::find_active(&db).await? {
        Some(record) => {
            println!("Status: connected");
            println!("  username      {}", record.username);
            println!("  connected at  {}", record.connected_at);
            match record.last_synced_at {
                Some(at) => println!("  last sync     {}", at),
                None => println!("  last sync     never"),
            }
        }
        None => {
            println!("Status: not connected");
            println!("  Run `gitmirror connect --token <token>` to connect an account.");
        }
    }

    let counts = store::collection_counts(&db).await?;
    println!("Collections:");
    println!("  organizations  {}", counts.organizations);
    println!("  repositories   {}", counts.repos);
    println!("  commits        {}", counts.commits);
    println!("  pull requests  {}", counts.pulls);
    println!("  issues         {}", counts.issues);
    println!("  changelogs     {}", counts.changelogs);
    println!("  users          {}", counts.users);

    Ok(())
}
