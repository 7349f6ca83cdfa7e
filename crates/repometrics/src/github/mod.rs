//! GitHub API client.
//!
//! The client walks paginated collection endpoints strictly sequentially,
//! classifies every raw response into a typed outcome, and assembles
//! best-effort metrics snapshots that degrade gracefully when sub-fetches
//! fail. See [`client::GitHubClient`] for the stable operation set:
//! `fetch_metrics`, `list_owner_repos`, and `get_open_issue_count`.

mod aggregate;
mod client;
mod convert;
mod error;
mod owner;
pub mod pagination;
pub mod types;

pub use client::{GitHubClient, API_VERSION, DEFAULT_API_URL};
pub use error::{GitHubError, Result};
