//! # GitHub Repository Endpoints
//!
//! Listing of repositories visible to the authenticated user, optionally
//! narrowed to one owning organization.

use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::Result;
use crate::filter::filter_by_owner;
use crate::models::Repository;
use crate::pagination::collect_pages;

impl GitHubClient {
  /// List every repository the authenticated user can access.
  ///
  /// `affiliation` and `visibility` are passed to the API verbatim; an empty
  /// string leaves the parameter out so GitHub applies its default.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_all_repositories(&self, affiliation: &str, visibility: &str) -> Result<Vec<Repository>> {
    let mut query = Vec::new();
    if !affiliation.is_empty() {
      query.push(("affiliation", affiliation.to_string()));
    }
    if !visibility.is_empty() {
      query.push(("visibility", visibility.to_string()));
    }

    let query = query.as_slice();
    let repos = collect_pages(move |page| self.fetch_page("/user/repos", query, page, "repositories")).await?;

    debug!("Listed {} repositories", repos.len());
    Ok(repos)
  }

  /// List the repositories owned by `organization`.
  ///
  /// `/user/repos` has no owner filter, so this walks the full unscoped
  /// listing and keeps the repositories whose owner login equals
  /// `organization` exactly.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_repositories_by_organization(&self, organization: &str) -> Result<Vec<Repository>> {
    let repos = self.list_all_repositories("", "").await?;
    let total = repos.len();
    let owned = filter_by_owner(repos, organization);

    debug!("{} of {} repositories belong to {}", owned.len(), total, organization);
    Ok(owned)
  }
}
