//! Repository entity - a repository belonging to a synced organization.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Repository model, keyed by the upstream numeric id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "repositories")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Upstream numeric repository id.
    #[sea_orm(unique)]
    pub platform_id: i64,

    /// Repository name (URL-safe slug).
    pub name: String,

    /// Full name in `owner/repo` form.
    pub full_name: String,

    /// Repository description.
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// When this record was last synced from GitHub.
    pub synced_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Owner login, derived from the full name.
    pub fn owner(&self) -> &str {
        self.full_name
            .split_once('/')
            .map(|(owner, _)| owner)
            .unwrap_or(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn owner_is_full_name_prefix() {
        let model = Model {
            id: Uuid::new_v4(),
            platform_id: 1,
            name: "hello-world".to_string(),
            full_name: "octocat/hello-world".to_string(),
            description: None,
            synced_at: Utc::now().fixed_offset(),
        };
        assert_eq!(model.owner(), "octocat");
    }
}
