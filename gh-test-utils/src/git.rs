//! Git repository management for testing
//!
//! Creates throwaway repositories that the clone tool can use as a remote.

use std::fs;
use std::path::Path;

use anyhow::Result;
use git2::{Repository, Signature};
use tempfile::TempDir;

/// A temporary git repository with one commit, usable as a clone source
/// (`git clone <path>`).
pub struct SourceRepoGuard {
  /// The temporary directory containing the git repository
  pub temp_dir: TempDir,
  /// The git repository
  pub repo: Repository,
}

impl SourceRepoGuard {
  /// Create a new source repository with an initial commit
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let repo = Repository::init(temp_dir.path()).expect("Failed to initialize git repository");

    create_commit(&repo, "README.md", "hello", "initial commit").expect("Failed to create initial commit");

    Self { temp_dir, repo }
  }

  /// Get the path to the git repository
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// The repository path as a string, for use as a clone URL
  pub fn url(&self) -> String {
    self.temp_dir.path().display().to_string()
  }
}

impl Default for SourceRepoGuard {
  fn default() -> Self {
    Self::new()
  }
}

/// Write `file_name` with `content` into the work tree and commit it.
pub fn create_commit(repo: &Repository, file_name: &str, content: &str, message: &str) -> Result<()> {
  let workdir = repo
    .workdir()
    .ok_or_else(|| anyhow::anyhow!("Repository has no working directory"))?;
  fs::write(workdir.join(file_name), content)?;

  let mut index = repo.index()?;
  index.add_path(Path::new(file_name))?;
  index.write()?;
  let tree_id = index.write_tree()?;
  let tree = repo.find_tree(tree_id)?;

  let signature = Signature::now("gh Test User", "gh-test@example.com")?;
  let parents = match repo.head() {
    Ok(head) => vec![head.peel_to_commit()?],
    Err(_) => Vec::new(),
  };
  let parent_refs: Vec<_> = parents.iter().collect();

  repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parent_refs)?;
  Ok(())
}
