//! Constants for the gh-api client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("gh-tools/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Number of items requested per page unless the client is told otherwise
pub const DEFAULT_PAGE_SIZE: u8 = 10;

/// Largest `per_page` value the GitHub API honours
pub const MAX_PAGE_SIZE: u8 = 100;
