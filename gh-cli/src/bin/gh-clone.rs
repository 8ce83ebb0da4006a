//! Entry point for `gh-clone`.

use anyhow::Result;

fn main() -> Result<()> {
  gh_cli::clone::run()
}
