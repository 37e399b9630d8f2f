//! User entity - a member of a synced organization.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Member model, keyed by the upstream numeric user id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Upstream numeric user id.
    #[sea_orm(unique)]
    pub platform_id: i64,

    /// Login name.
    pub login: String,

    /// Display name.
    pub name: Option<String>,

    /// Public email address.
    pub email: Option<String>,

    /// Login of the organization this membership was synced from.
    pub organization: String,

    /// When this record was last synced from GitHub.
    pub synced_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
