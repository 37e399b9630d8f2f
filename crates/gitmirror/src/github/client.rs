//! GitHub API client creation and request plumbing.

use std::time::Duration as StdDuration;

use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::error::GitHubError;
use super::types::{
    CommitSummary, IssueEventSummary, IssueSummary, MemberSummary, OrgSummary, PullSummary,
    RepoSummary, UserProfile,
};

/// Canonical GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// GitHub API client.
///
/// Holds exactly one credential and is stateless beyond it. Constructed
/// once per sync invocation from the resolved active integration; never
/// cached across runs.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for the canonical GitHub API.
    pub fn new(token: &str) -> Result<Self, GitHubError> {
        Self::with_base_url(token, GITHUB_API_URL)
    }

    /// Create a client against an arbitrary base URL.
    ///
    /// Used by tests to point the sync at a mock server.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self, GitHubError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GitHubError::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Get the base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an authenticated GET request and deserialize the JSON body.
    async fn get<T: DeserializeOwned>(&self, route: &str) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.base_url, route);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "gitmirror")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| GitHubError::Http(e.to_string()))?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| GitHubError::Http(e.to_string()))?;
                serde_json::from_slice(&body).map_err(GitHubError::from)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GitHubError::AuthRequired),
            StatusCode::NOT_FOUND => Err(GitHubError::NotFound(route.to_string())),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(GitHubError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// List organizations visible to the credential.
    pub async fn list_organizations(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<OrgSummary>, GitHubError> {
        self.get(&format!("/user/orgs?per_page={per_page}&page={page}"))
            .await
    }

    /// List an organization's repositories.
    pub async fn list_org_repos(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepoSummary>, GitHubError> {
        self.get(&format!("/orgs/{org}/repos?per_page={per_page}&page={page}"))
            .await
    }

    /// List an organization's members.
    pub async fn list_org_members(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<MemberSummary>, GitHubError> {
        self.get(&format!(
            "/orgs/{org}/members?per_page={per_page}&page={page}"
        ))
        .await
    }

    /// List a repository's commits.
    pub async fn list_repo_commits(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CommitSummary>, GitHubError> {
        self.get(&format!(
            "/repos/{owner}/{repo}/commits?per_page={per_page}&page={page}"
        ))
        .await
    }

    /// List a repository's pull requests.
    pub async fn list_repo_pulls(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<PullSummary>, GitHubError> {
        self.get(&format!(
            "/repos/{owner}/{repo}/pulls?per_page={per_page}&page={page}"
        ))
        .await
    }

    /// List a repository's issues.
    pub async fn list_repo_issues(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<IssueSummary>, GitHubError> {
        self.get(&format!(
            "/repos/{owner}/{repo}/issues?per_page={per_page}&page={page}"
        ))
        .await
    }

    /// List an issue's changelog events.
    pub async fn list_issue_events(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<IssueEventSummary>, GitHubError> {
        self.get(&format!(
            "/repos/{owner}/{repo}/issues/{issue_number}/events?per_page={per_page}&page={page}"
        ))
        .await
    }

    /// Fetch the authenticated user's profile.
    ///
    /// Used during credential acquisition to identify the account the
    /// integration record belongs to.
    pub async fn authenticated_user(&self) -> Result<UserProfile, GitHubError> {
        self.get("/user").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> GitHubClient {
        GitHubClient::with_base_url("test-token", &server.uri()).unwrap()
    }

    #[tokio::test]
    async fn list_org_repos_sends_auth_and_pagination() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "100"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "name": "widget", "full_name": "acme/widget" }
            ])))
            .mount(&server)
            .await;

        let repos = client_for(&server)
            .await
            .list_org_repos("acme", 2, 100)
            .await
            .unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "acme/widget");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_required() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .list_organizations(1, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::AuthRequired));
    }

    #[tokio::test]
    async fn not_found_maps_to_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/ghost/members"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .list_org_members("ghost", 1, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::NotFound(route) if route.contains("/orgs/ghost/members")));
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/pulls"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .list_repo_pulls("acme", "widget", 1, 100)
            .await
            .unwrap_err();
        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_maps_to_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.authenticated_user().await.unwrap_err();
        assert!(matches!(err, GitHubError::Json(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GitHubClient::with_base_url("t", "https://api.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
