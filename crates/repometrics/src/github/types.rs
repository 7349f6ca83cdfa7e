//! GitHub API wire types.
//!
//! Only the fields the metrics client actually reads are modeled; everything
//! else in the API payloads is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository metadata returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoDetails {
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Primary programming language.
    #[serde(default)]
    pub language: Option<String>,
    /// Coarse open-issue count maintained by GitHub. This number includes
    /// open pull requests, which is why the client prefers a paginated
    /// count and keeps this one only as a fallback.
    #[serde(default)]
    pub open_issues_count: u64,
}

/// Pull-request linkage marker attached to items in an issues listing.
///
/// Its presence is the only signal that an item returned from the issues
/// endpoint is actually a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub url: Option<String>,
}

/// Classification of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Issue,
    PullRequest,
}

/// One entry from an issues or pulls collection listing.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueItem {
    pub id: u64,
    /// Present iff the item is a pull request. The issues endpoint returns
    /// pull requests interleaved with true issues; the dedicated pulls
    /// endpoint never sets this field.
    pub pull_request: Option<PullRequestMarker>,
}

impl IssueItem {
    /// Classify the item by its pull-request linkage marker.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        if self.pull_request.is_some() {
            ItemKind::PullRequest
        } else {
            ItemKind::Issue
        }
    }

    #[inline]
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.kind() == ItemKind::PullRequest
    }
}

/// The account that owns a listed repository.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerAccount {
    pub login: String,
}

/// One entry from `GET /users/{owner}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerRepo {
    pub name: String,
    pub full_name: String,
    pub owner: Option<OwnerAccount>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub html_url: Option<String>,
    /// The API URL for the repository (the `url` field in the payload).
    pub url: Option<String>,
}
