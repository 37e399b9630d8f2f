//! Synchronization engine.
//!
//! Walks the GitHub dependency tree (organizations → repositories and
//! members → commits / pull requests / issues → issue events), normalizes
//! every page into documents, and commits them through bulk upserts.
//!
//! # Module structure
//!
//! - [`types`] - `SyncTotals`, `SyncOptions`, defaults
//! - [`progress`] - `SyncProgress` events, `ProgressCallback`, `emit()`
//! - [`engine`] - `run()`, `run_with_client()`, `sync_all()`
//!
//! # Example
//!
//! ```ignore
//! use gitmirror::sync::{self, SyncOptions};
//!
//! let db = gitmirror::connect_and_migrate("sqlite://mirror.db?mode=rwc").await?;
//! let totals = sync::run(&db, &SyncOptions::default(), None).await?;
//! println!("synced {} repositories", totals.repos);
//! ```

pub mod engine;
mod error;
mod progress;
mod types;

pub use engine::{run, run_with_client, sync_all};
pub use error::SyncError;
pub use progress::{emit, ProgressCallback, SyncProgress};
pub use types::{SyncOptions, SyncTotals};
