//! # gh-gists
//!
//! Prints the gists of the authenticated user, or the public gists of a
//! named account, as JSON lines.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{GistsCli, parse_args};
use crate::clients::create_github_runtime_and_client;
use crate::records::print_records;

/// Parse the process arguments and run the tool.
pub fn run() -> Result<()> {
  run_with(parse_args::<GistsCli>()?)
}

pub fn run_with(cli: GistsCli) -> Result<()> {
  let settings = cli
    .common
    .load(cli.flags())?
    .gist_list_settings()
    .context("error reading configuration")?;
  let (rt, client) = create_github_runtime_and_client(&settings.connection)?;

  info!("about to list gists in [{}]", settings.organization);
  let gists = rt
    .block_on(client.list_gists(&settings.organization))
    .context("error listing gists")?;

  print_records(&gists)
}
