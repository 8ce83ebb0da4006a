//! Errors returned by the GitHub client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, GitHubError>;

/// Errors produced while building the client or listing resources.
#[derive(Debug, Error)]
pub enum GitHubError {
  /// The token cannot be placed in an `Authorization` header.
  #[error("GitHub token contains characters that are not allowed in an HTTP header")]
  InvalidToken(#[source] reqwest::header::InvalidHeaderValue),

  /// The underlying HTTP client could not be constructed.
  #[error("failed to build HTTP client: {0}")]
  ClientBuild(#[source] reqwest::Error),

  /// The configured API base URL is not a valid URL.
  #[error("invalid GitHub API URL '{url}': {source}")]
  InvalidBaseUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },

  /// Transport-level failure (DNS, TLS, connection reset, ...).
  #[error("request to {url} failed: {source}")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  /// The token was rejected.
  #[error("Authentication failed (HTTP {status}). Please check your GitHub token.")]
  Authentication { status: StatusCode },

  #[error("{what} not found")]
  NotFound { what: String },

  /// Any other non-success response.
  #[error("GitHub API error: HTTP {status} - {message}")]
  Api { status: StatusCode, message: String },

  /// The response body was not the JSON we expected.
  #[error("failed to parse {what}: {source}")]
  Decode {
    what: String,
    #[source]
    source: serde_json::Error,
  },

  /// The server pointed us back at a page we already fetched.
  #[error("pagination did not terminate: page {page} was offered twice")]
  PaginationLoop { page: u32 },
}
