//! Administrative store operations backing the integration status and
//! removal surfaces.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::entity::prelude::{Changelog, Commit, Issue, Organization, Pull, Repo, User};

use super::errors::Result;

/// Document counts per synced collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionCounts {
    pub organizations: u64,
    pub repos: u64,
    pub commits: u64,
    pub pulls: u64,
    pub issues: u64,
    pub changelogs: u64,
    pub users: u64,
}

impl CollectionCounts {
    /// Total documents across all collections.
    pub fn total(&self) -> u64 {
        self.organizations
            + self.repos
            + self.commits
            + self.pulls
            + self.issues
            + self.changelogs
            + self.users
    }
}

/// Count documents in every synced collection.
pub async fn collection_counts(db: &DatabaseConnection) -> Result<CollectionCounts> {
    Ok(CollectionCounts {
        organizations: Organization::find().count(db).await?,
        repos: Repo::find().count(db).await?,
        commits: Commit::find().count(db).await?,
        pulls: Pull::find().count(db).await?,
        issues: Issue::find().count(db).await?,
        changelogs: Changelog::find().count(db).await?,
        users: User::find().count(db).await?,
    })
}

/// Delete every document from every synced collection.
///
/// The integration record is left untouched so a later resync does not
/// require reconnecting. Returns the total number of rows deleted.
pub async fn clear_all(db: &DatabaseConnection) -> Result<u64> {
    let mut deleted = 0u64;
    deleted += Organization::delete_many().exec(db).await?.rows_affected;
    deleted += Repo::delete_many().exec(db).await?.rows_affected;
    deleted += Commit::delete_many().exec(db).await?.rows_affected;
    deleted += Pull::delete_many().exec(db).await?.rows_affected;
    deleted += Issue::delete_many().exec(db).await?.rows_affected;
    deleted += Changelog::delete_many().exec(db).await?.rows_affected;
    deleted += User::delete_many().exec(db).await?.rows_affected;
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_every_collection() {
        let counts = CollectionCounts {
            organizations: 1,
            repos: 2,
            commits: 3,
            pulls: 4,
            issues: 5,
            changelogs: 6,
            users: 7,
        };
        assert_eq!(counts.total(), 28);
    }
}
