//! Wire types for the GitHub REST endpoints the sync consumes.
//!
//! These capture only the fields the mirror stores; unknown fields are
//! ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An organization from `GET /user/orgs`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgSummary {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A repository from `GET /orgs/{org}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RepoSummary {
    /// Owner login, derived from the full name. Falls back to the given
    /// login when the full name is not in `owner/repo` form.
    pub fn owner_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.full_name
            .split_once('/')
            .map(|(owner, _)| owner)
            .unwrap_or(fallback)
    }
}

/// A commit from `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSummary {
    pub sha: String,
    #[serde(default)]
    pub commit: CommitDetail,
}

/// Nested commit metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitSignature>,
}

/// Author signature on a commit.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// A pull request from `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullSummary {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub state: String,
}

/// An issue from `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueSummary {
    pub id: i64,
    #[serde(default)]
    pub number: Option<i64>,
    pub title: String,
    pub state: String,
}

/// An issue event from `GET /repos/{owner}/{repo}/issues/{number}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueEventSummary {
    pub id: i64,
    pub event: String,
    #[serde(default)]
    pub actor: Option<ActorSummary>,
}

/// Event actor reference.
#[derive(Debug, Clone, Deserialize)]
pub struct ActorSummary {
    pub login: String,
}

/// An organization member from `GET /orgs/{org}/members`.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSummary {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The authenticated user from `GET /user`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
