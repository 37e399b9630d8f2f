//! Progress reporting for sync runs.

use super::types::SyncTotals;

/// Progress events emitted during a sync run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SyncProgress {
    /// Starting to fetch the organization list.
    FetchingOrganizations,

    /// Organization list fetched and upserted.
    OrganizationsSynced {
        /// Number of organizations.
        count: usize,
    },

    /// Starting an organization's sub-tree.
    SyncingOrganization {
        /// Organization login.
        login: String,
    },

    /// An organization's repositories were fetched and upserted.
    RepositoriesSynced {
        /// Organization login.
        org: String,
        /// Number of repositories.
        count: usize,
    },

    /// An organization's members were fetched and upserted.
    MembersSynced {
        /// Organization login.
        org: String,
        /// Number of members.
        count: usize,
    },

    /// Starting a repository's sub-tree.
    SyncingRepository {
        /// Full repository name (`owner/repo`).
        full_name: String,
    },

    /// A repository's commits were fetched and upserted.
    CommitsSynced {
        /// Full repository name.
        repo: String,
        /// Number of commits.
        count: usize,
    },

    /// A repository's pull requests were fetched and upserted.
    PullsSynced {
        /// Full repository name.
        repo: String,
        /// Number of pull requests.
        count: usize,
    },

    /// A repository's issues were fetched and upserted.
    IssuesSynced {
        /// Full repository name.
        repo: String,
        /// Number of issues.
        count: usize,
    },

    /// An issue's changelog events were fetched and upserted.
    ChangelogsSynced {
        /// Full repository name.
        repo: String,
        /// Issue number the events belong to.
        issue_number: i64,
        /// Number of events.
        count: usize,
    },

    /// The full traversal finished.
    SyncComplete {
        /// Aggregate counts for the run.
        totals: SyncTotals,
    },
}

/// Callback for progress updates during sync runs.
pub type ProgressCallback = Box<dyn Fn(SyncProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: SyncProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn emit_invokes_the_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let callback: ProgressCallback = Box::new(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        emit(Some(&callback), SyncProgress::FetchingOrganizations);
        emit(
            Some(&callback),
            SyncProgress::OrganizationsSynced { count: 2 },
        );

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn emit_without_callback_is_a_no_op() {
        emit(None, SyncProgress::FetchingOrganizations);
    }
}
