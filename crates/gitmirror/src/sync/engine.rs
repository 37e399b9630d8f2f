//! The sync orchestrator.
//!
//! Traversal shape:
//!
//! ```text
//! organizations
//! ├── repositories ─┐  (concurrent per organization)
//! │   ├── commits ──┐
//! │   ├── pulls     │  (concurrent per repository)
//! │   └── issues ───┘
//! │       └── changelog events  (sequential per issue)
//! └── members ──────┘
//! ```
//!
//! Organizations, repositories, and issues are walked strictly in
//! sequence; each fan-out group is a `try_join!` barrier, so the first
//! failure in a group aborts the whole run. Documents upserted before the
//! failure remain committed; convergence comes from the next fully
//! successful run.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::github::pagination::fetch_all_pages;
use crate::github::types::{OrgSummary, RepoSummary};
use crate::github::{convert, GitHubClient};
use crate::{integration, store};

use super::error::SyncError;
use super::progress::{emit, ProgressCallback, SyncProgress};
use super::types::{SyncOptions, SyncTotals};

/// Run a full sync.
///
/// Resolves the active integration (failing with
/// [`SyncError::NoActiveIntegration`] before any network call), builds a
/// client from its credential, traverses the whole tree, and finally
/// stamps the integration's last-sync timestamp. The timestamp is only
/// written when every step succeeded.
#[tracing::instrument(skip_all)]
pub async fn run(
    db: &DatabaseConnection,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncTotals, SyncError> {
    let integration = integration::require_active(db).await?;
    let client = GitHubClient::new(&integration.oauth_token)?;

    let totals = sync_all(&client, db, options, on_progress).await?;

    integration::mark_synced(db, integration.id, Utc::now()).await?;
    Ok(totals)
}

/// Run a full sync with a caller-supplied client.
///
/// Same contract as [`run`], but the client is injected instead of being
/// built from the stored credential. Tests use this to point the engine
/// at a substitute server.
#[tracing::instrument(skip_all)]
pub async fn run_with_client(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncTotals, SyncError> {
    let integration = integration::require_active(db).await?;

    let totals = sync_all(client, db, options, on_progress).await?;

    integration::mark_synced(db, integration.id, Utc::now()).await?;
    Ok(totals)
}

/// Traverse the whole dependency tree and upsert every collection.
///
/// Does not touch the integration record; callers own credential
/// resolution and last-sync bookkeeping.
#[tracing::instrument(skip_all)]
pub async fn sync_all(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncTotals, SyncError> {
    let mut totals = SyncTotals::default();

    emit(on_progress, SyncProgress::FetchingOrganizations);
    let orgs = sync_organizations(client, db, options).await?;
    totals.organizations = orgs.len();
    emit(
        on_progress,
        SyncProgress::OrganizationsSynced { count: orgs.len() },
    );

    for org in &orgs {
        emit(
            on_progress,
            SyncProgress::SyncingOrganization {
                login: org.login.clone(),
            },
        );

        let (repos, members) = tokio::try_join!(
            sync_repos(client, db, options, &org.login, on_progress),
            sync_members(client, db, options, &org.login, on_progress),
        )?;
        totals.repos += repos.len();
        totals.users += members;

        for repo in &repos {
            let owner = repo.owner_or(&org.login);
            emit(
                on_progress,
                SyncProgress::SyncingRepository {
                    full_name: repo.full_name.clone(),
                },
            );

            let (commits, pulls, issues) = tokio::try_join!(
                sync_commits(client, db, options, owner, repo, on_progress),
                sync_pulls(client, db, options, owner, repo, on_progress),
                sync_issues(client, db, options, owner, repo, on_progress),
            )?;
            totals.commits += commits;
            totals.pulls += pulls;
            totals.issues += issues.issues;
            totals.changelogs += issues.changelogs;
        }
    }

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
    emit(on_progress, SyncProgress::SyncComplete { totals });

    Ok(totals)
}

/// Fetch and upsert the organization list.
///
/// A single page in practice, but routed through the page-fetch contract
/// like every other listing.
async fn sync_organizations(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
) -> Result<Vec<OrgSummary>, SyncError> {
    let orgs = fetch_all_pages(
        |page, per_page| client.list_organizations(page, per_page),
        options.per_page,
        options.max_pages,
    )
    .await?;

    store::upsert_organizations(db, orgs.iter().map(convert::org_to_model).collect()).await?;
    Ok(orgs)
}

/// Fetch and upsert one organization's repositories.
async fn sync_repos(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    org: &str,
    on_progress: Option<&ProgressCallback>,
) -> Result<Vec<RepoSummary>, SyncError> {
    let repos = fetch_all_pages(
        |page, per_page| client.list_org_repos(org, page, per_page),
        options.per_page,
        options.max_pages,
    )
    .await?;

    store::upsert_repos(db, repos.iter().map(convert::repo_to_model).collect()).await?;
    emit(
        on_progress,
        SyncProgress::RepositoriesSynced {
            org: org.to_string(),
            count: repos.len(),
        },
    );
    Ok(repos)
}

/// Fetch and upsert one organization's members.
async fn sync_members(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    org: &str,
    on_progress: Option<&ProgressCallback>,
) -> Result<usize, SyncError> {
    let members = fetch_all_pages(
        |page, per_page| client.list_org_members(org, page, per_page),
        options.per_page,
        options.max_pages,
    )
    .await?;

    store::upsert_members(
        db,
        members.iter().map(|m| convert::member_to_model(m, org)).collect(),
    )
    .await?;
    emit(
        on_progress,
        SyncProgress::MembersSynced {
            org: org.to_string(),
            count: members.len(),
        },
    );
    Ok(members.len())
}

/// Fetch and upsert one repository's commits.
async fn sync_commits(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    owner: &str,
    repo: &RepoSummary,
    on_progress: Option<&ProgressCallback>,
) -> Result<usize, SyncError> {
    let commits = fetch_all_pages(
        |page, per_page| client.list_repo_commits(owner, &repo.name, page, per_page),
        options.per_page,
        options.max_pages,
    )
    .await?;

    store::upsert_commits(
        db,
        commits
            .iter()
            .map(|c| convert::commit_to_model(c, &repo.name, &repo.full_name))
            .collect(),
    )
    .await?;
    emit(
        on_progress,
        SyncProgress::CommitsSynced {
            repo: repo.full_name.clone(),
            count: commits.len(),
        },
    );
    Ok(commits.len())
}

/// Fetch and upsert one repository's pull requests.
async fn sync_pulls(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    owner: &str,
    repo: &RepoSummary,
    on_progress: Option<&ProgressCallback>,
) -> Result<usize, SyncError> {
    let pulls = fetch_all_pages(
        |page, per_page| client.list_repo_pulls(owner, &repo.name, page, per_page),
        options.per_page,
        options.max_pages,
    )
    .await?;

    store::upsert_pulls(
        db,
        pulls
            .iter()
            .map(|p| convert::pull_to_model(p, &repo.name, &repo.full_name))
            .collect(),
    )
    .await?;
    emit(
        on_progress,
        SyncProgress::PullsSynced {
            repo: repo.full_name.clone(),
            count: pulls.len(),
        },
    );
    Ok(pulls.len())
}

/// Counts produced by the issue branch of a repository.
struct IssueStats {
    issues: usize,
    changelogs: usize,
}

/// Fetch and upsert one repository's issues, then each issue's changelog.
///
/// Changelog fetches run sequentially per issue, after the issues
/// themselves are committed; issues without a number are skipped.
async fn sync_issues(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    owner: &str,
    repo: &RepoSummary,
    on_progress: Option<&ProgressCallback>,
) -> Result<IssueStats, SyncError> {
    let issues = fetch_all_pages(
        |page, per_page| client.list_repo_issues(owner, &repo.name, page, per_page),
        options.per_page,
        options.max_pages,
    )
    .await?;

    store::upsert_issues(
        db,
        issues
            .iter()
            .map(|i| convert::issue_to_model(i, &repo.name, &repo.full_name))
            .collect(),
    )
    .await?;
    emit(
        on_progress,
        SyncProgress::IssuesSynced {
            repo: repo.full_name.clone(),
            count: issues.len(),
        },
    );

    let mut changelogs = 0usize;
    for issue in &issues {
        let Some(number) = issue.number else {
            continue;
        };
        changelogs += sync_changelogs(client, db, options, owner, repo, number, on_progress).await?;
    }

    Ok(IssueStats {
        issues: issues.len(),
        changelogs,
    })
}

/// Fetch and upsert one issue's changelog events.
async fn sync_changelogs(
    client: &GitHubClient,
    db: &DatabaseConnection,
    options: &SyncOptions,
    owner: &str,
    repo: &RepoSummary,
    issue_number: i64,
    on_progress: Option<&ProgressCallback>,
) -> Result<usize, SyncError> {
    let events = fetch_all_pages(
        |page, per_page| client.list_issue_events(owner, &repo.name, issue_number, page, per_page),
        options.per_page,
        options.max_pages,
    )
    .await?;

    store::upsert_changelogs(
        db,
        events
            .iter()
            .map(|e| convert::event_to_model(e, issue_number, &repo.name, &repo.full_name))
            .collect(),
    )
    .await?;
    emit(
        on_progress,
        SyncProgress::ChangelogsSynced {
            repo: repo.full_name.clone(),
            issue_number,
            count: events.len(),
        },
    );
    Ok(events.len())
}
