//! GitHub API client and response classification.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use serde::de::DeserializeOwned;

use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{header_get, HttpHeaders, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

use super::error::{GitHubError, Result};

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// API version sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Fixed per-call timeout for every network request.
const CALL_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// Header carrying the remaining request quota, read when a request is
/// rejected as rate-limited.
const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// GitHub API client.
///
/// Holds the connection-pool handle (via the injected transport) and an
/// optional bearer credential. All state is per-client; concurrent calls
/// share only the pool, so a single instance is safe to reuse across tasks.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client against `api_url` with an optional bearer token.
    ///
    /// A missing token is not an error; unauthenticated requests simply run
    /// under the lower server-enforced rate limit.
    pub fn new(api_url: &str, token: Option<&str>) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(CALL_TIMEOUT)
            .map_err(|e| GitHubError::Config(e.to_string()))?;
        Ok(Self::new_with_transport(
            api_url,
            token,
            Arc::new(transport),
        ))
    }

    /// Create a client over an explicit transport.
    ///
    /// This is the seam the tests use to inject deterministic responses.
    pub fn new_with_transport(
        api_url: &str,
        token: Option<&str>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        }
    }

    /// Get the API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn headers(&self) -> HttpHeaders {
        let mut headers = vec![
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            ("X-GitHub-Api-Version".to_string(), API_VERSION.to_string()),
            ("User-Agent".to_string(), "repometrics".to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    /// Make an authenticated GET request and decode the classified response.
    ///
    /// `resource` names what is being fetched and is carried into `NotFound`
    /// errors so callers can tell a missing repository from a missing owner.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        resource: &str,
    ) -> Result<T> {
        let url = format!("{}{}", self.api_url, path_and_query);

        let request = HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.headers(),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(GitHubError::from)?;

        let response = classify(response, resource)?;
        let data: T = serde_json::from_slice(&response.body)?;
        Ok(data)
    }
}

/// Map a raw HTTP response to a typed outcome.
///
/// This is the single classification point for every endpoint the client
/// touches: 404 means the resource is absent, 403/429 mean the quota is
/// exhausted (with the remaining-quota header as a hint), and any other
/// non-success status is surfaced verbatim.
fn classify(response: HttpResponse, resource: &str) -> Result<HttpResponse> {
    match response.status {
        s if (200..300).contains(&s) => Ok(response),
        404 => Err(GitHubError::not_found(resource)),
        403 | 429 => Err(GitHubError::rate_limited(rate_limit_remaining(
            &response.headers,
        ))),
        status => Err(GitHubError::UnexpectedStatus {
            status,
            message: String::from_utf8_lossy(&response.body).to_string(),
        }),
    }
}

/// Extract the remaining-quota hint from response headers.
fn rate_limit_remaining(headers: &HttpHeaders) -> String {
    header_get(headers, RATE_LIMIT_REMAINING_HEADER)
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}
