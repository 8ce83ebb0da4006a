//! Entry point for `gh-gists`.

use anyhow::Result;

fn main() -> Result<()> {
  gh_cli::gists::run()
}
