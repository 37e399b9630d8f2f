use gitmirror::store;

pub(crate) async fn handle_remove(database_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = gitmirror::connect_and_migrate(database_url).await?;

    let deleted = store::clear_all(&db).await?;
    println!("Removed {} synced documents. The integration credential was kept.", deleted);

    Ok(())
}
