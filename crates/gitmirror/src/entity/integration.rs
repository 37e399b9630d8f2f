//! Integration entity - the GitHub credential driving all API calls.
//!
//! There is at most one row with status `active` at any time. The sync
//! engine resolves it at the start of every run and stamps
//! `last_synced_at` once a full traversal completes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entity::integration_status::IntegrationStatus;

/// Integration model - one credential record per connected GitHub account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "integrations")]
pub struct Model {
    /// Internal UUID primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// GitHub account id of the connected user.
    #[sea_orm(unique)]
    pub github_user_id: String,

    /// GitHub login of the connected user.
    pub username: String,

    /// OAuth access token used for every upstream call.
    #[sea_orm(column_type = "Text")]
    pub oauth_token: String,

    /// Whether this credential currently drives syncs.
    pub status: IntegrationStatus,

    /// When the credential was acquired.
    pub connected_at: DateTimeWithTimeZone,

    /// When the last full sync completed, if any.
    pub last_synced_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Check whether this credential is the active one.
    pub fn is_active(&self) -> bool {
        self.status == IntegrationStatus::Active
    }
}
