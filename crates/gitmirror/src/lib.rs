//! gitmirror - mirror a GitHub organization graph into a local database.
//!
//! The library walks the paginated GitHub API across its dependency tree
//! (organizations → repositories and members → commits / pull requests /
//! issues → issue events), normalizes every page into documents, and
//! commits them idempotently through bulk upserts. One credential record
//! drives all calls; its last-sync timestamp is stamped after each fully
//! successful traversal.
//!
//! # Example
//!
//! ```ignore
//! use gitmirror::sync::{self, SyncOptions};
//!
//! let db = gitmirror::connect_and_migrate("sqlite://mirror.db?mode=rwc").await?;
//! let totals = sync::run(&db, &SyncOptions::default(), None).await?;
//! println!(
//!     "synced {} orgs, {} repos, {} commits",
//!     totals.organizations, totals.repos, totals.commits
//! );
//! ```

pub mod db;
pub mod entity;
pub mod github;
pub mod integration;
pub mod migration;
pub mod store;
pub mod sync;

pub use db::{connect, connect_and_migrate};
pub use entity::prelude::*;
pub use github::{GitHubClient, GitHubError};
pub use integration::IntegrationError;
pub use store::{CollectionCounts, StoreError};
pub use sync::{SyncError, SyncOptions, SyncProgress, SyncTotals};
