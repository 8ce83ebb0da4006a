//! # GitHub Gist Endpoints

use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::Result;
use crate::models::Gist;
use crate::pagination::collect_pages;

impl GitHubClient {
  /// List gists.
  ///
  /// With an empty `owner` this lists the authenticated user's gists;
  /// otherwise it lists the public gists of the named account.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_gists(&self, owner: &str) -> Result<Vec<Gist>> {
    let path = if owner.is_empty() {
      "/gists".to_string()
    } else {
      format!("/users/{owner}/gists")
    };

    let path = path.as_str();
    let gists = collect_pages(move |page| self.fetch_page(path, &[], page, "gists")).await?;

    debug!("Listed {} gists", gists.len());
    Ok(gists)
  }
}
