//! Repository metrics aggregation.
//!
//! Composes the single-object metadata fetch with paginated issue and
//! pull-request counts into one [`RepositoryMetrics`] snapshot. The
//! metadata fetch is mandatory; every counter past it is best-effort and
//! degrades to a documented default instead of failing the snapshot, since
//! the counters multiply the number of requests against a rate-limited API.

use crate::metrics::{DetailedCounts, RepositoryMetrics};

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::{ListState, PagedRoute, Paginator};
use super::types::{IssueItem, RepoDetails};

impl GitHubClient {
    /// Fetch repository metadata.
    ///
    /// `GET /repos/{owner}/{repo}` — a single object, not paginated.
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepoDetails> {
        self.get_json(
            &format!("/repos/{}/{}", owner, repo),
            &format!("repository {}/{}", owner, repo),
        )
        .await
    }

    /// Count open issues by paginating the issues listing.
    ///
    /// Pull requests are excluded: the issues endpoint returns them
    /// interleaved with true issues.
    pub async fn get_open_issue_count(&self, owner: &str, repo: &str) -> Result<u64> {
        self.count_items(PagedRoute::issues(owner, repo, ListState::Open), true)
            .await
    }

    /// Walk a listing endpoint and count its items.
    ///
    /// With `exclude_pull_requests` set, items carrying the pull-request
    /// linkage marker are dropped from the count; the dedicated pulls
    /// endpoint never needs the filter.
    async fn count_items(&self, route: PagedRoute, exclude_pull_requests: bool) -> Result<u64> {
        let resource = route.resource().to_string();
        let mut pager: Paginator<'_, IssueItem> = Paginator::new(self, route);
        let mut total = 0u64;

        while let Some(page) = pager.next_page().await? {
            let fetched = page.items.len();
            let counted = if exclude_pull_requests {
                page.items.iter().filter(|i| !i.is_pull_request()).count()
            } else {
                fetched
            };
            total += counted as u64;
            tracing::debug!(
                resource = resource.as_str(),
                page = page.number,
                fetched,
                counted,
                "counted listing page"
            );
        }

        Ok(total)
    }

    /// Run one best-effort counter, substituting `default` on any failure.
    async fn count_or(
        &self,
        route: PagedRoute,
        exclude_pull_requests: bool,
        counter: &'static str,
        default: u64,
    ) -> u64 {
        match self.count_items(route, exclude_pull_requests).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(
                    counter,
                    default,
                    error = %e,
                    "counter fetch failed, substituting default"
                );
                default
            }
        }
    }

    /// Fetch the four detailed issue/PR counters.
    ///
    /// Each counter is independent: a failure in one defaults only that
    /// count (0, or `open_issue_fallback` for the open-issues counter)
    /// without affecting the others.
    async fn detailed_counts(
        &self,
        owner: &str,
        repo: &str,
        open_issue_fallback: u64,
    ) -> DetailedCounts {
        let issues_open = self
            .count_or(
                PagedRoute::issues(owner, repo, ListState::Open),
                true,
                "issues_open",
                open_issue_fallback,
            )
            .await;
        let issues_closed = self
            .count_or(
                PagedRoute::issues(owner, repo, ListState::Closed),
                true,
                "issues_closed",
                0,
            )
            .await;
        let prs_open = self
            .count_or(
                PagedRoute::pulls(owner, repo, ListState::Open),
                false,
                "prs_open",
                0,
            )
            .await;
        let prs_closed = self
            .count_or(
                PagedRoute::pulls(owner, repo, ListState::Closed),
                false,
                "prs_closed",
                0,
            )
            .await;

        DetailedCounts {
            issues_open,
            issues_closed,
            prs_open,
            prs_closed,
        }
    }

    /// Assemble a metrics snapshot for one repository.
    ///
    /// The metadata fetch is mandatory and its failure is the failure of
    /// this call. The precise open-issue count falls back to the metadata's
    /// coarse `open_issues_count`; with `include_detailed`, four further
    /// best-effort counters are attached.
    pub async fn fetch_metrics(
        &self,
        owner: &str,
        repo: &str,
        include_detailed: bool,
    ) -> Result<RepositoryMetrics> {
        let details = self.get_repository(owner, repo).await?;
        let stars = details.stargazers_count;
        let coarse_open_issues = details.open_issues_count;

        let issues = match self.get_open_issue_count(owner, repo).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(
                    owner,
                    repo,
                    fallback = coarse_open_issues,
                    error = %e,
                    "open-issue pagination failed, using coarse metadata count"
                );
                coarse_open_issues
            }
        };

        let detailed = if include_detailed {
            Some(self.detailed_counts(owner, repo, issues).await)
        } else {
            None
        };

        tracing::info!(owner, repo, stars, issues, "assembled repository metrics");

        Ok(RepositoryMetrics {
            owner: owner.to_string(),
            repo: repo.to_string(),
            stars,
            issues,
            language: details.language,
            detailed,
        })
    }
}
