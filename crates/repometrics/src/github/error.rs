//! GitHub API error taxonomy.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur when interacting with the GitHub API.
///
/// Every endpoint the client touches classifies its raw response into one of
/// these kinds; callers pattern-match on the variant rather than inspecting
/// status codes or exception chains.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Resource absent on GitHub (repository, owner, listing).
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// API quota exhausted. Carries the remaining-quota header value as a
    /// diagnostic hint (`"unknown"` when the header was absent).
    #[error("rate limit exceeded (remaining: {remaining})")]
    RateLimited { remaining: String },

    /// No response within the per-call deadline.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Transport-level failure (DNS, connect, reset).
    #[error("network error: {message}")]
    Network { message: String },

    /// Any other non-success response.
    #[error("unexpected HTTP status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client could not be constructed.
    #[error("client configuration error: {0}")]
    Config(String),
}

impl GitHubError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a rate limited error with a remaining-quota hint.
    #[inline]
    pub fn rate_limited(remaining: impl Into<String>) -> Self {
        Self::RateLimited {
            remaining: remaining.into(),
        }
    }

    /// Create a timeout error.
    #[inline]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Create a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Check if this error is a rate limit error.
    #[inline]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Check if this error means the resource does not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Short machine-friendly name for the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::RateLimited { .. } => "rate_limited",
            Self::Timeout { .. } => "timeout",
            Self::Network { .. } => "network_error",
            Self::UnexpectedStatus { .. } => "unexpected_status",
            Self::Decode(_) => "decode_error",
            Self::Config(_) => "config_error",
        }
    }
}

impl From<HttpError> for GitHubError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(message) => GitHubError::Timeout { message },
            HttpError::Transport(message) => GitHubError::Network { message },
            HttpError::NoMockResponse { method, url } => GitHubError::Network {
                message: format!("no mock response for {} {}", method, url),
            },
        }
    }
}

/// Result type for GitHub client operations.
pub type Result<T> = std::result::Result<T, GitHubError>;
