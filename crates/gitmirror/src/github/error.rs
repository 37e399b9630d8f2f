//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success response from the API.
    #[error("GitHub API error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// Credential rejected (401/403).
    #[error("Authentication required")]
    AuthRequired,

    /// Resource does not exist (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// A paginated endpoint kept returning full pages past the sanity cap.
    #[error("Pagination exceeded {limit} pages without a final short page")]
    PageLimitExceeded { limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let err = GitHubError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }

    #[test]
    fn page_limit_display_names_the_cap() {
        let err = GitHubError::PageLimitExceeded { limit: 10_000 };
        assert!(err.to_string().contains("10000"));
    }
}
