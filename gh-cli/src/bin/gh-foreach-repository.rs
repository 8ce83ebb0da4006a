//! Entry point for `gh-foreach-repository`.

use anyhow::Result;

fn main() -> Result<()> {
  gh_cli::repositories::run()
}
