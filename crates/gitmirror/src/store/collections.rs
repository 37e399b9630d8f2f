//! Per-collection upsert wrappers.
//!
//! Each wrapper stamps every document with a single `synced_at` value
//! immediately before the batch is sent, so all documents in one batch
//! share one write-clock reading, then delegates to the generic bulk
//! upsert keyed on the collection's external unique key.

use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};

use crate::entity::{changelog, commit, issue, organization, pull, repo, user};

use super::bulk::bulk_upsert;
use super::errors::Result;

/// Upsert organizations by upstream id.
pub async fn upsert_organizations(
    db: &DatabaseConnection,
    mut models: Vec<organization::ActiveModel>,
) -> Result<u64> {
    let now = Utc::now().fixed_offset();
    for model in &mut models {
        model.synced_at = Set(now);
    }
    bulk_upsert(
        db,
        models,
        organization::Column::PlatformId,
        &[
            organization::Column::Login,
            organization::Column::Name,
            organization::Column::Description,
            organization::Column::SyncedAt,
        ],
    )
    .await
}

/// Upsert repositories by upstream id.
pub async fn upsert_repos(
    db: &DatabaseConnection,
    mut models: Vec<repo::ActiveModel>,
) -> Result<u64> {
    let now = Utc::now().fixed_offset();
    for model in &mut models {
        model.synced_at = Set(now);
    }
    bulk_upsert(
        db,
        models,
        repo::Column::PlatformId,
        &[
            repo::Column::Name,
            repo::Column::FullName,
            repo::Column::Description,
            repo::Column::SyncedAt,
        ],
    )
    .await
}

/// Upsert commits by hash.
pub async fn upsert_commits(
    db: &DatabaseConnection,
    mut models: Vec<commit::ActiveModel>,
) -> Result<u64> {
    let now = Utc::now().fixed_offset();
    for model in &mut models {
        model.synced_at = Set(now);
    }
    bulk_upsert(
        db,
        models,
        commit::Column::Sha,
        &[
            commit::Column::Repo,
            commit::Column::RepoFullName,
            commit::Column::Message,
            commit::Column::Author,
            commit::Column::AuthoredAt,
            commit::Column::SyncedAt,
        ],
    )
    .await
}

/// Upsert pull requests by upstream id.
pub async fn upsert_pulls(
    db: &DatabaseConnection,
    mut models: Vec<pull::ActiveModel>,
) -> Result<u64> {
    let now = Utc::now().fixed_offset();
    for model in &mut models {
        model.synced_at = Set(now);
    }
    bulk_upsert(
        db,
        models,
        pull::Column::PlatformId,
        &[
            pull::Column::Number,
            pull::Column::Title,
            pull::Column::State,
            pull::Column::Repo,
            pull::Column::RepoFullName,
            pull::Column::SyncedAt,
        ],
    )
    .await
}

/// Upsert issues by upstream id.
pub async fn upsert_issues(
    db: &DatabaseConnection,
    mut models: Vec<issue::ActiveModel>,
) -> Result<u64> {
    let now = Utc::now().fixed_offset();
    for model in &mut models {
        model.synced_at = Set(now);
    }
    bulk_upsert(
        db,
        models,
        issue::Column::PlatformId,
        &[
            issue::Column::Number,
            issue::Column::Title,
            issue::Column::State,
            issue::Column::Repo,
            issue::Column::RepoFullName,
            issue::Column::SyncedAt,
        ],
    )
    .await
}

/// Upsert changelog events by upstream id.
pub async fn upsert_changelogs(
    db: &DatabaseConnection,
    mut models: Vec<changelog::ActiveModel>,
) -> Result<u64> {
    let now = Utc::now().fixed_offset();
    for model in &mut models {
        model.synced_at = Set(now);
    }
    bulk_upsert(
        db,
        models,
        changelog::Column::PlatformId,
        &[
            changelog::Column::Event,
            changelog::Column::Actor,
            changelog::Column::IssueNumber,
            changelog::Column::Repo,
            changelog::Column::RepoFullName,
            changelog::Column::SyncedAt,
        ],
    )
    .await
}

/// Upsert organization members by upstream id.
pub async fn upsert_members(
    db: &DatabaseConnection,
    mut models: Vec<user::ActiveModel>,
) -> Result<u64> {
    let now = Utc::now().fixed_offset();
    for model in &mut models {
        model.synced_at = Set(now);
    }
    bulk_upsert(
        db,
        models,
        user::Column::PlatformId,
        &[
            user::Column::Login,
            user::Column::Name,
            user::Column::Email,
            user::Column::Organization,
            user::Column::SyncedAt,
        ],
    )
    .await
}
