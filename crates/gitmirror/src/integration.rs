//! Integration credential service.
//!
//! The integration record is the single credential source for the sync
//! engine. It is read once at the start of a run and written once at the
//! end; acquisition (the OAuth dance) happens outside this crate, with
//! [`activate`] recording its outcome.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use uuid::Uuid;

use crate::entity::integration::{ActiveModel, Column, Entity, Model};
use crate::entity::integration_status::IntegrationStatus;
use crate::github::types::UserProfile;

/// Error type for integration operations.
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("No active GitHub integration found")]
    NoActiveIntegration,
}

/// Find the active integration, if any.
pub async fn find_active(db: &DatabaseConnection) -> Result<Option<Model>, IntegrationError> {
    Entity::find()
        .filter(Column::Status.eq(IntegrationStatus::Active))
        .one(db)
        .await
        .map_err(IntegrationError::Database)
}

/// Resolve the active integration, failing when none exists.
pub async fn require_active(db: &DatabaseConnection) -> Result<Model, IntegrationError> {
    find_active(db)
        .await?
        .ok_or(IntegrationError::NoActiveIntegration)
}

/// Record a freshly acquired credential as the active integration.
///
/// Upserts by GitHub user id and demotes any other active row to
/// `revoked`, so at most one integration is active at a time.
pub async fn activate(
    db: &DatabaseConnection,
    profile: &UserProfile,
    token: &str,
) -> Result<Model, IntegrationError> {
    let github_user_id = profile.id.to_string();

    let actives = Entity::find()
        .filter(Column::Status.eq(IntegrationStatus::Active))
        .all(db)
        .await?;
    for current in actives {
        if current.github_user_id != github_user_id {
            let mut revoked: ActiveModel = current.into_active_model();
            revoked.status = Set(IntegrationStatus::Revoked);
            revoked.update(db).await?;
        }
    }

    let existing = Entity::find()
        .filter(Column::GithubUserId.eq(github_user_id.as_str()))
        .one(db)
        .await?;

    let model = match existing {
        Some(existing) => ActiveModel {
            id: Set(existing.id),
            github_user_id: Set(github_user_id),
            username: Set(profile.login.clone()),
            oauth_token: Set(token.to_string()),
            status: Set(IntegrationStatus::Active),
            connected_at: Set(Utc::now().fixed_offset()),
            last_synced_at: Set(existing.last_synced_at),
        }
        .update(db)
        .await?,
        None => ActiveModel {
            id: Set(Uuid::new_v4()),
            github_user_id: Set(github_user_id),
            username: Set(profile.login.clone()),
            oauth_token: Set(token.to_string()),
            status: Set(IntegrationStatus::Active),
            connected_at: Set(Utc::now().fixed_offset()),
            last_synced_at: Set(None),
        }
        .insert(db)
        .await?,
    };

    Ok(model)
}

/// Stamp the last-sync timestamp after a fully successful traversal.
pub async fn mark_synced(
    db: &DatabaseConnection,
    id: Uuid,
    at: DateTime<Utc>,
) -> Result<(), IntegrationError> {
    let model = ActiveModel {
        id: Set(id),
        last_synced_at: Set(Some(at.fixed_offset())),
        ..Default::default()
    };
    model.update(db).await?;
    Ok(())
}
