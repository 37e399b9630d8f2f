//! GitHub REST API client, wire types, and pagination.
//!
//! The client owns exactly one credential and exposes each list endpoint
//! as a `(page, per_page)` call matching the pagination fetcher's
//! contract. No method retries; a failure aborts the enclosing traversal.

pub mod client;
pub mod convert;
pub mod error;
pub mod pagination;
pub mod types;

pub use client::{GitHubClient, GITHUB_API_URL};
pub use error::GitHubError;
pub use pagination::fetch_all_pages;
