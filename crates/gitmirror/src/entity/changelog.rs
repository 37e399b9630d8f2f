//! Changelog entity - a timeline event on an issue.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Changelog event model, keyed by the upstream numeric event id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "changelogs")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Upstream numeric event id.
    #[sea_orm(unique)]
    pub platform_id: i64,

    /// Event type (`closed`, `labeled`, `assigned`, ...).
    pub event: String,

    /// Login of the user who triggered the event.
    pub actor: Option<String>,

    /// Number of the issue this event belongs to.
    pub issue_number: i64,

    /// Name of the repository this event belongs to.
    pub repo: String,

    /// Full repository name in `owner/repo` form.
    pub repo_full_name: String,

    /// When this record was last synced from GitHub.
    pub synced_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
