//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, request building, and response parsing for the paginated
//! list endpoints.

use gh_core::creds::Token;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::consts::{ACCEPT, API_BASE_URL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, USER_AGENT};
use crate::error::{GitHubError, Result};
use crate::pagination::{Page, next_page_from_link};

/// Represents an authenticated GitHub API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) per_page: u8,
}

impl GitHubClient {
  /// Create a new GitHub client authenticated with `token`.
  ///
  /// Fails when the token cannot be sent as a header value or when the TLS
  /// backend cannot be initialised.
  pub fn new(token: &Token) -> Result<Self> {
    let mut auth =
      HeaderValue::from_str(&format!("Bearer {}", token.expose())).map_err(GitHubError::InvalidToken)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth);
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

    let client = Client::builder()
      .default_headers(headers)
      .user_agent(USER_AGENT)
      .build()
      .map_err(GitHubError::ClientBuild)?;

    Ok(Self {
      client,
      base_url: API_BASE_URL.to_string(),
      per_page: DEFAULT_PAGE_SIZE,
    })
  }

  /// Point the client at a different API root, e.g. a GitHub Enterprise
  /// instance (`https://github.example.com/api/v3`).
  pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
    Url::parse(base_url).map_err(|source| GitHubError::InvalidBaseUrl {
      url: base_url.to_string(),
      source,
    })?;
    self.base_url = base_url.trim_end_matches('/').to_string();
    Ok(self)
  }

  /// Set the number of items requested per page (clamped to 1..=100).
  pub fn with_page_size(mut self, per_page: u8) -> Self {
    self.per_page = per_page.clamp(1, MAX_PAGE_SIZE);
    self
  }

  /// The API root requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Number of items requested per page
  pub fn page_size(&self) -> u8 {
    self.per_page
  }

  /// Fetch one page of a list endpoint.
  ///
  /// `page` is `None` for the first request. The returned [`Page`] carries
  /// the next page number parsed from the `Link` header, or `None` when the
  /// response was the last page.
  #[instrument(skip(self, query), level = "debug")]
  pub(crate) async fn fetch_page<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, String)],
    page: Option<u32>,
    what: &str,
  ) -> Result<Page<T>> {
    let url = format!("{}{}", self.base_url, path);

    let mut request = self
      .client
      .get(&url)
      .query(&[("per_page", self.per_page.to_string())])
      .query(query);
    if let Some(page) = page {
      request = request.query(&[("page", page.to_string())]);
    }

    let response = request.send().await.map_err(|source| GitHubError::Request {
      url: url.clone(),
      source,
    })?;

    let status = response.status();
    let next_page = response
      .headers()
      .get(header::LINK)
      .and_then(|value| value.to_str().ok())
      .and_then(next_page_from_link);

    let body = response
      .text()
      .await
      .map_err(|source| GitHubError::Request { url, source })?;

    match status {
      StatusCode::OK => {
        let items = serde_json::from_str::<Vec<T>>(&body).map_err(|source| GitHubError::Decode {
          what: what.to_string(),
          source,
        })?;
        debug!(count = items.len(), ?next_page, "Fetched page of {what}");
        Ok(Page { items, next_page })
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GitHubError::Authentication { status }),
      StatusCode::NOT_FOUND => Err(GitHubError::NotFound { what: what.to_string() }),
      _ => Err(GitHubError::Api {
        status,
        message: api_error_message(&body),
      }),
    }
  }
}

/// Create a GitHub client from a token
pub fn connect(token: &Token) -> Result<GitHubClient> {
  GitHubClient::new(token)
}

/// Pull the `message` field out of a GitHub error body, falling back to the
/// raw body.
fn api_error_message(body: &str) -> String {
  serde_json::from_str::<serde_json::Value>(body)
    .ok()
    .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
    .unwrap_or_else(|| body.to_string())
}
