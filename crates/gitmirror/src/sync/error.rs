//! Sync error taxonomy.

use thiserror::Error;

use crate::github::GitHubError;
use crate::integration::IntegrationError;
use crate::store::StoreError;

/// Errors that abort a sync run.
///
/// There is no retry, backoff, or rollback: the first failure at any depth
/// unwinds the whole traversal and surfaces here. Batches committed before
/// the failure stay committed.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No credential available; raised before any network call.
    #[error("No active GitHub integration found")]
    NoActiveIntegration,

    /// The external API failed (transport, auth, malformed payload).
    #[error("GitHub error: {0}")]
    Upstream(#[from] GitHubError),

    /// The local store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<IntegrationError> for SyncError {
    fn from(err: IntegrationError) -> Self {
        match err {
            IntegrationError::NoActiveIntegration => SyncError::NoActiveIntegration,
            IntegrationError::Database(e) => SyncError::Store(StoreError::Database(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_errors_map_into_sync_errors() {
        let err: SyncError = IntegrationError::NoActiveIntegration.into();
        assert!(matches!(err, SyncError::NoActiveIntegration));

        let err: SyncError =
            IntegrationError::Database(sea_orm::DbErr::RecordNotFound("x".to_string())).into();
        assert!(matches!(err, SyncError::Store(_)));
    }

    #[test]
    fn upstream_errors_wrap_transparently() {
        let err: SyncError = GitHubError::AuthRequired.into();
        assert!(matches!(err, SyncError::Upstream(GitHubError::AuthRequired)));
    }
}
