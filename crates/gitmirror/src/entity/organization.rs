//! Organization entity - a GitHub organization visible to the credential.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Organization model, keyed by the upstream numeric id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Upstream numeric organization id.
    #[sea_orm(unique)]
    pub platform_id: i64,

    /// Login name (URL-safe slug).
    pub login: String,

    /// Display name.
    pub name: Option<String>,

    /// Organization description.
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// When this record was last synced from GitHub.
    pub synced_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
