//! repometrics - a GitHub repository metrics client.
//!
//! Fetches stars, language, and open/closed issue and pull-request counts
//! for a repository, and lists an owner's repositories, by walking the
//! paginated GitHub collection endpoints. Responses are classified into a
//! typed error taxonomy; mandatory fetches propagate failures while
//! best-effort counters degrade to documented defaults, so a single
//! exhausted rate-limit quota degrades a snapshot instead of blanking it.
//!
//! # Example
//!
//! ```ignore
//! use repometrics::GitHubClient;
//!
//! let client = GitHubClient::new(repometrics::DEFAULT_API_URL, None)?;
//! let metrics = client.fetch_metrics("rust-lang", "rust", true).await?;
//! println!("{} stars, {} open issues", metrics.stars, metrics.issues);
//! ```
//!
//! Persistence and HTTP serving are left to the caller: every operation
//! returns a freshly assembled value or a typed error, nothing is cached,
//! and the only shared state is the outbound connection pool.

pub mod github;
pub mod http;
pub mod metrics;

pub use github::{GitHubClient, GitHubError, Result, DEFAULT_API_URL};
pub use metrics::{
    aggregate_repos, DetailedCounts, OwnerAggregate, OwnerRepoSummary, RepositoryMetrics,
};
