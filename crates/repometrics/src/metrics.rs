//! Public output model for repository metrics.
//!
//! These types are what callers receive and are decoupled from the GitHub
//! wire types in [`crate::github::types`]; the caller decides whether to
//! persist them. All values are created fresh per request and carry no
//! client state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Detailed issue and pull-request counters.
///
/// Each of the four counts is fetched independently and best-effort: a
/// failed counter is reported as its documented default rather than failing
/// the snapshot, so values may be undercounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetailedCounts {
    pub issues_open: u64,
    pub issues_closed: u64,
    pub prs_open: u64,
    pub prs_closed: u64,
}

impl DetailedCounts {
    /// Total issues across both states.
    #[inline]
    #[must_use]
    pub fn total_issues(&self) -> u64 {
        self.issues_open + self.issues_closed
    }

    /// Total pull requests across both states.
    #[inline]
    #[must_use]
    pub fn total_prs(&self) -> u64 {
        self.prs_open + self.prs_closed
    }
}

/// A best-effort metrics snapshot for one repository.
///
/// `issues` is the basic open-issue count: the precise paginated count when
/// that fetch succeeds, otherwise the coarse `open_issues_count` from the
/// repository metadata. The detailed counters keep their own open-issue
/// value; the two are reported separately and may disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryMetrics {
    pub owner: String,
    pub repo: String,
    pub stars: u64,
    pub issues: u64,
    pub language: Option<String>,
    #[serde(flatten)]
    pub detailed: Option<DetailedCounts>,
}

/// One repository from an owner's repository listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerRepoSummary {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub is_private: bool,
    pub is_fork: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub html_url: Option<String>,
    pub api_url: Option<String>,
}

/// In-memory rollup over a fetched repository list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerAggregate {
    pub owner: String,
    pub repo_count: usize,
    pub total_stars: u64,
    pub total_open_issues: u64,
    /// Repository count per primary language; repositories without a
    /// detected language are not counted here.
    pub by_language: BTreeMap<String, usize>,
}

/// Aggregate a list of repository summaries for one owner.
#[must_use]
pub fn aggregate_repos(owner: &str, repos: &[OwnerRepoSummary]) -> OwnerAggregate {
    let mut by_language: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_stars = 0u64;
    let mut total_open_issues = 0u64;

    for repo in repos {
        total_stars += repo.stars;
        total_open_issues += repo.open_issues;
        if let Some(language) = &repo.language {
            *by_language.entry(language.clone()).or_insert(0) += 1;
        }
    }

    OwnerAggregate {
        owner: owner.to_string(),
        repo_count: repos.len(),
        total_stars,
        total_open_issues,
        by_language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, stars: u64, open_issues: u64, language: Option<&str>) -> OwnerRepoSummary {
        OwnerRepoSummary {
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
            owner: "octocat".to_string(),
            description: None,
            stars,
            forks: 0,
            open_issues,
            language: language.map(str::to_string),
            is_private: false,
            is_fork: false,
            created_at: None,
            updated_at: None,
            pushed_at: None,
            html_url: None,
            api_url: None,
        }
    }

    #[test]
    fn test_detailed_counts_totals() {
        let counts = DetailedCounts {
            issues_open: 3,
            issues_closed: 7,
            prs_open: 2,
            prs_closed: 8,
        };
        assert_eq!(counts.total_issues(), 10);
        assert_eq!(counts.total_prs(), 10);
    }

    #[test]
    fn test_metrics_serialize_without_detailed_counts() {
        let metrics = RepositoryMetrics {
            owner: "octocat".to_string(),
            repo: "hello".to_string(),
            stars: 42,
            issues: 7,
            language: Some("Rust".to_string()),
            detailed: None,
        };
        let value = serde_json::to_value(&metrics).unwrap();
        assert_eq!(value["stars"], 42);
        assert_eq!(value["issues"], 7);
        assert!(value.get("issues_open").is_none());
    }

    #[test]
    fn test_metrics_serialize_flattens_detailed_counts() {
        let metrics = RepositoryMetrics {
            owner: "octocat".to_string(),
            repo: "hello".to_string(),
            stars: 42,
            issues: 7,
            language: None,
            detailed: Some(DetailedCounts {
                issues_open: 5,
                issues_closed: 2,
                prs_open: 1,
                prs_closed: 4,
            }),
        };
        let value = serde_json::to_value(&metrics).unwrap();
        // The basic and detailed open-issue counts are reported side by side.
        assert_eq!(value["issues"], 7);
        assert_eq!(value["issues_open"], 5);
        assert_eq!(value["issues_closed"], 2);
        assert_eq!(value["prs_open"], 1);
        assert_eq!(value["prs_closed"], 4);
    }

    #[test]
    fn test_aggregate_repos_sums_and_groups() {
        let repos = vec![
            summary("a", 10, 1, Some("Rust")),
            summary("b", 20, 2, Some("Rust")),
            summary("c", 5, 0, Some("Go")),
            summary("d", 1, 4, None),
        ];
        let aggregate = aggregate_repos("octocat", &repos);

        assert_eq!(aggregate.owner, "octocat");
        assert_eq!(aggregate.repo_count, 4);
        assert_eq!(aggregate.total_stars, 36);
        assert_eq!(aggregate.total_open_issues, 7);
        assert_eq!(aggregate.by_language.get("Rust"), Some(&2));
        assert_eq!(aggregate.by_language.get("Go"), Some(&1));
        assert_eq!(aggregate.by_language.len(), 2);
    }

    #[test]
    fn test_aggregate_repos_empty_list() {
        let aggregate = aggregate_repos("nobody", &[]);
        assert_eq!(aggregate.repo_count, 0);
        assert_eq!(aggregate.total_stars, 0);
        assert!(aggregate.by_language.is_empty());
    }
}
