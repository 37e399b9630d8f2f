//! Status enum for the GitHub integration credential.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an integration credential.
///
/// Exactly one integration may be `Active` at a time; it is the sole
/// credential source for API calls.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum IntegrationStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "revoked")]
    Revoked,
}

impl std::fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrationStatus::Active => write!(f, "active"),
            IntegrationStatus::Revoked => write!(f, "revoked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_outputs_expected_strings() {
        assert_eq!(IntegrationStatus::Active.to_string(), "active");
        assert_eq!(IntegrationStatus::Revoked.to_string(), "revoked");
    }
}
