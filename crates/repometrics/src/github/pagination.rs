//! Paginated collection fetching.
//!
//! All collection endpoints (issues, pulls, owner repositories) are walked
//! through [`Paginator`], which yields pages strictly sequentially until one
//! of the termination rules fires. Concurrent page fetches against a
//! rate-limited API would only accelerate quota exhaustion, so there is no
//! read-ahead.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use super::client::GitHubClient;
use super::error::Result;

/// Items requested per page (the platform maximum).
pub const PAGE_SIZE: u32 = 100;

/// Hard safety cap on pages fetched per collection walk.
///
/// Protects against a misbehaving endpoint that keeps returning full pages
/// and never signals the end of its data.
pub const MAX_PAGES: u32 = 100;

/// State filter for issue and pull-request listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Open,
    Closed,
}

impl ListState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ListState::Open => "open",
            ListState::Closed => "closed",
        }
    }
}

/// Route builder for one paginated collection endpoint.
///
/// Holds the path and the fixed query parameters; the page number and page
/// size are appended per request.
pub struct PagedRoute {
    path: String,
    resource: String,
    params: Vec<(&'static str, String)>,
}

impl PagedRoute {
    /// Route for a repository's issues listing.
    ///
    /// Items returned here may carry a pull-request linkage marker and need
    /// filtering before being counted as issues.
    pub fn issues(owner: &str, repo: &str, state: ListState) -> Self {
        Self {
            path: format!("/repos/{}/{}/issues", owner, repo),
            resource: format!("issues of {}/{}", owner, repo),
            params: vec![("state", state.as_str().to_string())],
        }
    }

    /// Route for a repository's pull-requests listing.
    pub fn pulls(owner: &str, repo: &str, state: ListState) -> Self {
        Self {
            path: format!("/repos/{}/{}/pulls", owner, repo),
            resource: format!("pull requests of {}/{}", owner, repo),
            params: vec![("state", state.as_str().to_string())],
        }
    }

    /// Route for an owner's repositories, sorted by last update descending.
    pub fn owner_repos(owner: &str) -> Self {
        Self {
            path: format!("/users/{}/repos", owner),
            resource: format!("owner {}", owner),
            params: vec![
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
            ],
        }
    }

    /// Human-readable name of the collection, carried into NotFound errors.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Build the full path and query string for a page number.
    #[must_use]
    pub fn route(&self, page: u32) -> String {
        let mut query = String::new();
        for (key, value) in &self.params {
            query.push_str(key);
            query.push('=');
            query.push_str(value);
            query.push('&');
        }
        format!(
            "{}?{}page={}&per_page={}",
            self.path, query, page, PAGE_SIZE
        )
    }
}

/// One fetched page of a collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// 1-based page number that produced these items.
    pub number: u32,
    pub items: Vec<T>,
}

/// Lazy, finite sequence of pages from a collection endpoint.
///
/// Termination rules, checked in order after each fetch:
/// 1. a NotFound response ends the walk with an error (distinct from an
///    empty collection);
/// 2. an empty page ends the walk cleanly;
/// 3. a partial page is yielded as the last page;
/// 4. after [`MAX_PAGES`] pages the walk halts even if the server never
///    signalled the end.
pub struct Paginator<'a, T> {
    client: &'a GitHubClient,
    route: PagedRoute,
    page: u32,
    done: bool,
    _marker: PhantomData<T>,
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
    pub fn new(client: &'a GitHubClient, route: PagedRoute) -> Self {
        Self {
            client,
            route,
            page: 1,
            done: false,
            _marker: PhantomData,
        }
    }

    /// Fetch the next page, or `None` when the sequence has ended.
    ///
    /// Any error ends the sequence; subsequent calls return `None`.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        if self.done {
            return Ok(None);
        }
        if self.page > MAX_PAGES {
            tracing::warn!(
                resource = self.route.resource(),
                max_pages = MAX_PAGES,
                "pagination safety cap reached, stopping early"
            );
            self.done = true;
            return Ok(None);
        }

        let number = self.page;
        let items: Vec<T> = match self
            .client
            .get_json(&self.route.route(number), self.route.resource())
            .await
        {
            Ok(items) => items,
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };

        if items.is_empty() {
            tracing::debug!(
                resource = self.route.resource(),
                page = number,
                "reached end of collection"
            );
            self.done = true;
            return Ok(None);
        }

        if (items.len() as u32) < PAGE_SIZE {
            // Fewer items than the page size means this is the last page.
            self.done = true;
        }
        self.page = number + 1;

        tracing::debug!(
            resource = self.route.resource(),
            page = number,
            count = items.len(),
            "fetched collection page"
        );
        Ok(Some(Page { number, items }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::github::client::DEFAULT_API_URL;
    use crate::github::types::IssueItem;
    use crate::http::{HttpMethod, HttpResponse, MockTransport};

    fn issue_page(start: u64, count: usize) -> Vec<u8> {
        let items: Vec<serde_json::Value> = (0..count)
            .map(|i| serde_json::json!({"id": start + i as u64}))
            .collect();
        serde_json::to_vec(&items).expect("page should serialize")
    }

    fn json_response(body: Vec<u8>) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }

    fn client_with(transport: &MockTransport) -> GitHubClient {
        GitHubClient::new_with_transport(DEFAULT_API_URL, None, Arc::new(transport.clone()))
    }

    fn issues_url(page: u32) -> String {
        format!("{DEFAULT_API_URL}/repos/o/r/issues?state=open&page={page}&per_page=100")
    }

    #[test]
    fn test_issues_route_builds_expected_query() {
        let route = PagedRoute::issues("rust-lang", "rust", ListState::Open);
        assert_eq!(
            route.route(3),
            "/repos/rust-lang/rust/issues?state=open&page=3&per_page=100"
        );
        assert_eq!(route.resource(), "issues of rust-lang/rust");
    }

    #[test]
    fn test_pulls_route_builds_expected_query() {
        let route = PagedRoute::pulls("o", "r", ListState::Closed);
        assert_eq!(route.route(1), "/repos/o/r/pulls?state=closed&page=1&per_page=100");
    }

    #[test]
    fn test_owner_repos_route_sorts_by_update_descending() {
        let route = PagedRoute::owner_repos("octocat");
        assert_eq!(
            route.route(2),
            "/users/octocat/repos?sort=updated&direction=desc&page=2&per_page=100"
        );
        assert_eq!(route.resource(), "owner octocat");
    }

    #[test]
    fn test_list_state_as_str() {
        assert_eq!(ListState::Open.as_str(), "open");
        assert_eq!(ListState::Closed.as_str(), "closed");
    }

    #[tokio::test]
    async fn test_paginator_stops_after_partial_page() {
        let transport = MockTransport::new();
        transport.push_response(HttpMethod::Get, issues_url(1), json_response(issue_page(0, 100)));
        transport.push_response(HttpMethod::Get, issues_url(2), json_response(issue_page(100, 50)));

        let client = client_with(&transport);
        let mut pager: Paginator<'_, IssueItem> =
            Paginator::new(&client, PagedRoute::issues("o", "r", ListState::Open));

        let first = pager.next_page().await.unwrap().expect("first page");
        assert_eq!(first.number, 1);
        assert_eq!(first.items.len(), 100);

        let second = pager.next_page().await.unwrap().expect("second page");
        assert_eq!(second.number, 2);
        assert_eq!(second.items.len(), 50);

        assert!(pager.next_page().await.unwrap().is_none());

        // The partial page ended the walk; no third request was issued.
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_paginator_empty_first_page_is_clean_end() {
        let transport = MockTransport::new();
        transport.push_response(HttpMethod::Get, issues_url(1), json_response(issue_page(0, 0)));

        let client = client_with(&transport);
        let mut pager: Paginator<'_, IssueItem> =
            Paginator::new(&client, PagedRoute::issues("o", "r", ListState::Open));

        assert!(pager.next_page().await.unwrap().is_none());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_paginator_not_found_is_an_error_not_empty() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            issues_url(1),
            HttpResponse {
                status: 404,
                headers: Vec::new(),
                body: Vec::new(),
            },
        );

        let client = client_with(&transport);
        let mut pager: Paginator<'_, IssueItem> =
            Paginator::new(&client, PagedRoute::issues("o", "r", ListState::Open));

        let err = pager.next_page().await.expect_err("404 should surface");
        assert!(err.is_not_found());

        // The sequence is over; no further requests are attempted.
        assert!(pager.next_page().await.unwrap().is_none());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_paginator_halts_at_safety_cap_on_endless_full_pages() {
        let transport = MockTransport::new();
        for page in 1..=MAX_PAGES {
            transport.push_response(
                HttpMethod::Get,
                issues_url(page),
                json_response(issue_page(u64::from(page) * 1000, 100)),
            );
        }

        let client = client_with(&transport);
        let mut pager: Paginator<'_, IssueItem> =
            Paginator::new(&client, PagedRoute::issues("o", "r", ListState::Open));

        let mut pages = 0u32;
        while let Some(page) = pager.next_page().await.unwrap() {
            assert_eq!(page.items.len(), 100);
            pages += 1;
        }

        assert_eq!(pages, MAX_PAGES);
        assert_eq!(transport.requests().len(), MAX_PAGES as usize);
    }
}
