//! Issue entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Issue model, keyed by the upstream numeric id.
///
/// The issue number is nullable; issues without one are stored but their
/// changelog events are never fetched.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "issues")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Upstream numeric issue id.
    #[sea_orm(unique)]
    pub platform_id: i64,

    /// Issue number within the repository.
    pub number: Option<i64>,

    /// Title.
    #[sea_orm(column_type = "Text")]
    pub title: String,

    /// State (`open`, `closed`).
    pub state: String,

    /// Name of the repository this issue belongs to.
    pub repo: String,

    /// Full repository name in `owner/repo` form.
    pub repo_full_name: String,

    /// When this record was last synced from GitHub.
    pub synced_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
