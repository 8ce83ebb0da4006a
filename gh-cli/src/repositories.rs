//! # gh-foreach-repository
//!
//! Prints every repository visible to the authenticated user as JSON lines.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{RepositoriesCli, parse_args};
use crate::clients::create_github_runtime_and_client;
use crate::records::print_records;

/// Parse the process arguments and run the tool.
pub fn run() -> Result<()> {
  run_with(parse_args::<RepositoriesCli>()?)
}

pub fn run_with(cli: RepositoriesCli) -> Result<()> {
  let settings = cli
    .common
    .load(cli.flags())?
    .repository_list_settings()
    .context("error reading configuration")?;
  let (rt, client) = create_github_runtime_and_client(&settings.connection)?;

  info!(
    affiliation = %settings.affiliation,
    visibility = %settings.visibility,
    "about to list repositories"
  );
  let repositories = rt
    .block_on(client.list_all_repositories(&settings.affiliation, &settings.visibility))
    .context("error listing repositories")?;

  print_records(&repositories)
}
