//! # Client Creation
//!
//! Builds the GitHub client and the runtime that drives it from resolved
//! connection settings.

use anyhow::{Context, Result};
use gh_api::GitHubClient;
use gh_core::ConnectionSettings;
use tokio::runtime::Runtime;

/// Creates an authenticated GitHub client, pointed at the configured API
/// root when one is set.
pub fn create_github_client(connection: &ConnectionSettings) -> Result<GitHubClient> {
  let client = gh_api::connect(&connection.token).context("Failed to create GitHub client")?;

  match connection.api_url.as_deref() {
    Some(api_url) => client
      .with_base_url(api_url)
      .context("Failed to create GitHub client"),
    None => Ok(client),
  }
}

/// Creates a tokio runtime and an authenticated GitHub client
///
/// The tools are synchronous scripts; the runtime only exists to drive the
/// client's requests with `block_on`.
pub fn create_github_runtime_and_client(connection: &ConnectionSettings) -> Result<(Runtime, GitHubClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_github_client(connection)?;
  Ok((rt, client))
}
