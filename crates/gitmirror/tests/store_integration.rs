//! Integration tests for the bulk upsert store against in-memory SQLite.
//!
//! These exercise the real ON CONFLICT path: re-ingesting a document with
//! a known key must overwrite it rather than duplicate it.

use gitmirror::connect_and_migrate;
use gitmirror::entity::prelude::*;
use gitmirror::github::convert;
use gitmirror::github::types::{CommitSummary, OrgSummary};
use gitmirror::store;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn setup_db() -> sea_orm::DatabaseConnection {
    connect_and_migrate("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

fn org(id: i64, login: &str, name: Option<&str>, description: Option<&str>) -> OrgSummary {
    OrgSummary {
        id,
        login: login.to_string(),
        name: name.map(String::from),
        description: description.map(String::from),
    }
}

fn commit(sha: &str, message: &str) -> CommitSummary {
    serde_json::from_value(serde_json::json!({
        "sha": sha,
        "commit": { "message": message },
    }))
    .unwrap()
}

#[tokio::test]
async fn upserting_the_same_key_twice_keeps_one_record_with_latest_fields() {
    let db = setup_db().await;

    let first = org(1, "acme", Some("Acme"), None);
    store::upsert_organizations(&db, vec![convert::org_to_model(&first)])
        .await
        .unwrap();

    let second = org(1, "acme", Some("Acme Corporation"), Some("tools"));
    store::upsert_organizations(&db, vec![convert::org_to_model(&second)])
        .await
        .unwrap();

    let rows = Organization::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].platform_id, 1);
    assert_eq!(rows[0].name.as_deref(), Some("Acme Corporation"));
    assert_eq!(rows[0].description.as_deref(), Some("tools"));
}

#[tokio::test]
async fn reingesting_a_batch_does_not_grow_the_collection() {
    let db = setup_db().await;

    let orgs = vec![org(1, "acme", None, None), org(2, "globex", None, None)];
    let models = || -> Vec<OrganizationActiveModel> {
        orgs.iter().map(convert::org_to_model).collect()
    };

    store::upsert_organizations(&db, models()).await.unwrap();
    let after_first = Organization::find().count(&db).await.unwrap();

    store::upsert_organizations(&db, models()).await.unwrap();
    let after_second = Organization::find().count(&db).await.unwrap();

    assert_eq!(after_first, 2);
    assert_eq!(after_second, 2);
}

#[tokio::test]
async fn commits_are_keyed_by_hash() {
    let db = setup_db().await;

    let original = commit("deadbeef", "first message");
    store::upsert_commits(
        &db,
        vec![convert::commit_to_model(&original, "widget", "acme/widget")],
    )
    .await
    .unwrap();

    let amended = commit("deadbeef", "amended message");
    store::upsert_commits(
        &db,
        vec![convert::commit_to_model(&amended, "widget", "acme/widget")],
    )
    .await
    .unwrap();

    let rows = Commit::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sha, "deadbeef");
    assert_eq!(rows[0].message, "amended message");
}

#[tokio::test]
async fn documents_in_one_batch_share_a_synced_at_value() {
    let db = setup_db().await;

    let orgs = vec![org(1, "acme", None, None), org(2, "globex", None, None)];
    store::upsert_organizations(&db, orgs.iter().map(convert::org_to_model).collect())
        .await
        .unwrap();

    let rows = Organization::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].synced_at, rows[1].synced_at);
}

#[tokio::test]
async fn upsert_refreshes_synced_at() {
    let db = setup_db().await;

    let doc = org(1, "acme", None, None);
    store::upsert_organizations(&db, vec![convert::org_to_model(&doc)])
        .await
        .unwrap();
    let first = Organization::find().one(&db).await.unwrap().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    store::upsert_organizations(&db, vec![convert::org_to_model(&doc)])
        .await
        .unwrap();
    let second = Organization::find().one(&db).await.unwrap().unwrap();

    assert!(second.synced_at >= first.synced_at);
}

#[tokio::test]
async fn clear_all_empties_every_synced_collection() {
    let db = setup_db().await;

    store::upsert_organizations(&db, vec![convert::org_to_model(&org(1, "acme", None, None))])
        .await
        .unwrap();
    store::upsert_commits(
        &db,
        vec![convert::commit_to_model(
            &commit("cafe", "m"),
            "widget",
            "acme/widget",
        )],
    )
    .await
    .unwrap();

    let before = store::collection_counts(&db).await.unwrap();
    assert_eq!(before.organizations, 1);
    assert_eq!(before.commits, 1);
    assert_eq!(before.total(), 2);

    let deleted = store::clear_all(&db).await.unwrap();
    assert_eq!(deleted, 2);

    let after = store::collection_counts(&db).await.unwrap();
    assert_eq!(after.total(), 0);
}
