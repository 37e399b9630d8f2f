//! Commit entity - a commit from a synced repository, keyed by hash.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Commit model, keyed by the commit hash.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commits")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Commit hash.
    #[sea_orm(unique)]
    pub sha: String,

    /// Name of the repository this commit belongs to.
    pub repo: String,

    /// Full repository name in `owner/repo` form.
    pub repo_full_name: String,

    /// Commit message.
    #[sea_orm(column_type = "Text")]
    pub message: String,

    /// Author name from the commit metadata.
    pub author: Option<String>,

    /// When the commit was authored.
    pub authored_at: Option<DateTimeWithTimeZone>,

    /// When this record was last synced from GitHub.
    pub synced_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
