//! Owner repository listing.

use crate::metrics::OwnerRepoSummary;

use super::client::GitHubClient;
use super::convert::to_repo_summary;
use super::error::Result;
use super::pagination::{PagedRoute, Paginator};
use super::types::OwnerRepo;

impl GitHubClient {
    /// List repositories owned by a user or organization, most recently
    /// updated first.
    ///
    /// With a `limit`, the walk returns as soon as that many repositories
    /// have been collected; remaining items on the current page are
    /// discarded and no further pages are requested. An unknown owner
    /// surfaces as a `NotFound` error naming the owner.
    pub async fn list_owner_repos(
        &self,
        owner: &str,
        limit: Option<usize>,
    ) -> Result<Vec<OwnerRepoSummary>> {
        let mut pager: Paginator<'_, OwnerRepo> =
            Paginator::new(self, PagedRoute::owner_repos(owner));
        let mut repos: Vec<OwnerRepoSummary> = Vec::new();

        while let Some(page) = pager.next_page().await? {
            for item in &page.items {
                repos.push(to_repo_summary(item));
                if limit.is_some_and(|l| repos.len() >= l) {
                    tracing::debug!(owner, limit = repos.len(), "reached repository limit");
                    return Ok(repos);
                }
            }
        }

        tracing::info!(owner, total = repos.len(), "fetched owner repositories");
        Ok(repos)
    }
}
