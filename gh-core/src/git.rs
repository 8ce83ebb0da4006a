//! # Git Command Helpers
//!
//! Spawning `git` sub-processes for the clone tool. Callers go through the
//! [`GitRunner`] trait so the clone loop can be exercised without a real
//! `git` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

use crate::consts;

/// A failed `git` invocation.
#[derive(Debug, Error)]
pub enum GitError {
  /// The process could not be started at all.
  #[error("failed to execute git {}: {source}", .args.join(" "))]
  Spawn {
    args: Vec<String>,
    #[source]
    source: std::io::Error,
  },

  /// The process ran and exited unsuccessfully.
  #[error("git {} exited with {status}: {}", .args.join(" "), .stderr.trim())]
  Failed {
    args: Vec<String>,
    status: ExitStatus,
    stderr: String,
  },
}

/// Something that can run `git` with an argument list.
pub trait GitRunner {
  fn run(&self, args: &[&str]) -> Result<(), GitError>;

  /// Whether `dir` (relative to where `git` runs) is itself a checkout,
  /// i.e. has its own `.git`.
  fn is_repository(&self, dir: &str) -> bool;
}

/// Runs the system `git` binary from a fixed working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
  working_dir: PathBuf,
}

impl SystemGit {
  pub fn new(working_dir: impl Into<PathBuf>) -> Self {
    Self {
      working_dir: working_dir.into(),
    }
  }

  pub fn working_dir(&self) -> &Path {
    &self.working_dir
  }
}

impl GitRunner for SystemGit {
  fn run(&self, args: &[&str]) -> Result<(), GitError> {
    let owned_args = || args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>();

    debug!("Running git {}", args.join(" "));
    let output = Command::new(consts::GIT_EXECUTABLE)
      .args(args)
      .current_dir(&self.working_dir)
      .output()
      .map_err(|source| GitError::Spawn {
        args: owned_args(),
        source,
      })?;

    if output.status.success() {
      Ok(())
    } else {
      Err(GitError::Failed {
        args: owned_args(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
      })
    }
  }

  fn is_repository(&self, dir: &str) -> bool {
    self.working_dir.join(dir).join(".git").exists()
  }
}

/// `git clone <url> <dir>`
pub fn clone_args<'a>(url: &'a str, dir: &'a str) -> [&'a str; 3] {
  ["clone", url, dir]
}

/// `git -C <dir> config <key> <value>`
pub fn config_args<'a>(dir: &'a str, key: &'a str, value: &'a str) -> [&'a str; 5] {
  ["-C", dir, "config", key, value]
}
