//! Logging reporter for sync progress events.

use gitmirror::sync::SyncProgress;

/// Reporter that forwards progress events to tracing.
pub struct LoggingReporter;

impl LoggingReporter {
    pub fn handle(event: SyncProgress) {
        match event {
            SyncProgress::FetchingOrganizations => {
                tracing::info!("Fetching organizations");
            }
            SyncProgress::OrganizationsSynced { count } => {
                tracing::info!(count, "Organizations synced");
            }
            SyncProgress::SyncingOrganization { login } => {
                tracing::info!(org = %login, "Syncing organization");
            }
            SyncProgress::RepositoriesSynced { org, count } => {
                tracing::info!(org = %org, count, "Repositories synced");
            }
            SyncProgress::MembersSynced { org, count } => {
                tracing::info!(org = %org, count, "Members synced");
            }
            SyncProgress::SyncingRepository { full_name } => {
                tracing::debug!(repo = %full_name, "Syncing repository");
            }
            SyncProgress::CommitsSynced { repo, count } => {
                tracing::debug!(repo = %repo, count, "Commits synced");
            }
            SyncProgress::PullsSynced { repo, count } => {
                tracing::debug!(repo = %repo, count, "Pull requests synced");
            }
            SyncProgress::IssuesSynced { repo, count } => {
                tracing::debug!(repo = %repo, count, "Issues synced");
            }
            SyncProgress::ChangelogsSynced {
                repo,
                issue_number,
                count,
            } => {
                tracing::debug!(repo = %repo, issue_number, count, "Changelog events synced");
            }
            SyncProgress::SyncComplete { totals } => {
                tracing::info!(
                    organizations = totals.organizations,
                    repos = totals.repos,
                    commits = totals.commits,
                    pulls = totals.pulls,
                    issues = totals.issues,
                    changelogs = totals.changelogs,
                    users = totals.users,
                    "Sync complete"
                );
            }
            _ => {}
        }
    }
}
