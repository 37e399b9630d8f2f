//! Pull request entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pull request model, keyed by the upstream numeric id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pulls")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Upstream numeric pull request id.
    #[sea_orm(unique)]
    pub platform_id: i64,

    /// Pull request number within the repository.
    pub number: i64,

    /// Title.
    #[sea_orm(column_type = "Text")]
    pub title: String,

    /// State (`open`, `closed`).
    pub state: String,

    /// Name of the repository this pull request belongs to.
    pub repo: String,

    /// Full repository name in `owner/repo` form.
    pub repo_full_name: String,

    /// When this record was last synced from GitHub.
    pub synced_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
