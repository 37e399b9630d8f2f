//! Conversions from GitHub wire types to database active models.
//!
//! Conversions never set `synced_at`; the store stamps every document in
//! a batch with a single write-clock value just before the batch is sent.

use sea_orm::Set;
use uuid::Uuid;

use crate::entity::{changelog, commit, issue, organization, pull, repo, user};

use super::types::{
    CommitSummary, IssueEventSummary, IssueSummary, MemberSummary, OrgSummary, PullSummary,
    RepoSummary,
};

/// Convert an organization summary.
pub fn org_to_model(org: &OrgSummary) -> organization::ActiveModel {
    organization::ActiveModel {
        id: Set(Uuid::new_v4()),
        platform_id: Set(org.id),
        login: Set(org.login.clone()),
        name: Set(org.name.clone()),
        description: Set(org.description.clone()),
        ..Default::default()
    }
}

/// Convert a repository summary.
pub fn repo_to_model(repo: &RepoSummary) -> repo::ActiveModel {
    repo::ActiveModel {
        id: Set(Uuid::new_v4()),
        platform_id: Set(repo.id),
        name: Set(repo.name.clone()),
        full_name: Set(repo.full_name.clone()),
        description: Set(repo.description.clone()),
        ..Default::default()
    }
}

/// Convert a commit summary, tagging it with its repository.
pub fn commit_to_model(
    commit: &CommitSummary,
    repo: &str,
    repo_full_name: &str,
) -> commit::ActiveModel {
    let author = commit.commit.author.as_ref();
    commit::ActiveModel {
        id: Set(Uuid::new_v4()),
        sha: Set(commit.sha.clone()),
        repo: Set(repo.to_string()),
        repo_full_name: Set(repo_full_name.to_string()),
        message: Set(commit.commit.message.clone()),
        author: Set(author.and_then(|a| a.name.clone())),
        authored_at: Set(author.and_then(|a| a.date).map(|d| d.fixed_offset())),
        ..Default::default()
    }
}

/// Convert a pull request summary, tagging it with its repository.
pub fn pull_to_model(pull: &PullSummary, repo: &str, repo_full_name: &str) -> pull::ActiveModel {
    pull::ActiveModel {
        id: Set(Uuid::new_v4()),
        platform_id: Set(pull.id),
        number: Set(pull.number),
        title: Set(pull.title.clone()),
        state: Set(pull.state.clone()),
        repo: Set(repo.to_string()),
        repo_full_name: Set(repo_full_name.to_string()),
        ..Default::default()
    }
}

/// Convert an issue summary, tagging it with its repository.
pub fn issue_to_model(issue: &IssueSummary, repo: &str, repo_full_name: &str) -> issue::ActiveModel {
    issue::ActiveModel {
        id: Set(Uuid::new_v4()),
        platform_id: Set(issue.id),
        number: Set(issue.number),
        title: Set(issue.title.clone()),
        state: Set(issue.state.clone()),
        repo: Set(repo.to_string()),
        repo_full_name: Set(repo_full_name.to_string()),
        ..Default::default()
    }
}

/// Convert an issue event, tagging it with its issue and repository.
pub fn event_to_model(
    event: &IssueEventSummary,
    issue_number: i64,
    repo: &str,
    repo_full_name: &str,
) -> changelog::ActiveModel {
    changelog::ActiveModel {
        id: Set(Uuid::new_v4()),
        platform_id: Set(event.id),
        event: Set(event.event.clone()),
        actor: Set(event.actor.as_ref().map(|a| a.login.clone())),
        issue_number: Set(issue_number),
        repo: Set(repo.to_string()),
        repo_full_name: Set(repo_full_name.to_string()),
        ..Default::default()
    }
}

/// Convert an organization member, tagging it with the organization.
pub fn member_to_model(member: &MemberSummary, organization: &str) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(Uuid::new_v4()),
        platform_id: Set(member.id),
        login: Set(member.login.clone()),
        name: Set(member.name.clone()),
        email: Set(member.email.clone()),
        organization: Set(organization.to_string()),
        ..Default::default()
    }
}
