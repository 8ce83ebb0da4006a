//! # gh-clone
//!
//! Clones every repository owned by an organization into `<owner>/<name>`
//! below the working directory, optionally setting a local identity in each
//! clone.
//!
//! A failed `git` invocation never stops the run. Failures are collected in
//! a [`CloneReport`] and summarised on stderr once every repository has been
//! attempted; the process still exits successfully.

use std::fmt;

use anyhow::{Context, Result};
use gh_api::Repository;
use gh_core::CloneSettings;
use gh_core::git::{GitError, GitRunner, SystemGit, clone_args, config_args};
use gh_core::output::{format_repo_name, print_error, print_success, print_warning};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cli::{CloneCli, parse_args};
use crate::clients::create_github_runtime_and_client;

/// Parse the process arguments and run the tool.
pub fn run() -> Result<()> {
  run_with(parse_args::<CloneCli>()?)
}

pub fn run_with(cli: CloneCli) -> Result<()> {
  let settings = cli
    .common
    .load(cli.flags())?
    .clone_settings()
    .context("error reading configuration")?;
  let (rt, client) = create_github_runtime_and_client(&settings.connection)?;

  info!("about to clone [{}]", settings.organization);
  let repositories = rt
    .block_on(client.list_repositories_by_organization(&settings.organization))
    .context("error listing repositories")?;

  let working_dir = std::env::current_dir().context("Failed to determine the current directory")?;
  let git = SystemGit::new(working_dir);

  let report = clone_all(&git, &repositories, &settings);
  report.print_summary();

  Ok(())
}

/// The `git` invocation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneStep {
  Clone,
  UserName,
  UserEmail,
}

impl fmt::Display for CloneStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CloneStep::Clone => write!(f, "clone"),
      CloneStep::UserName => write!(f, "set user.name"),
      CloneStep::UserEmail => write!(f, "set user.email"),
    }
  }
}

#[derive(Debug, Error)]
pub enum CloneError {
  #[error("repository has no clone URL")]
  MissingUrl,

  #[error(transparent)]
  Git(#[from] GitError),
}

#[derive(Debug)]
pub struct CloneFailure {
  /// Full name of the repository (`owner/name`)
  pub repository: String,
  pub step: CloneStep,
  pub error: CloneError,
}

/// Outcome of one clone run
#[derive(Debug, Default)]
pub struct CloneReport {
  pub attempted: usize,
  pub cloned: usize,
  pub failures: Vec<CloneFailure>,
}

impl CloneReport {
  fn record(&mut self, repository: &str, step: CloneStep, error: CloneError) {
    warn!("{step} failed for {repository}: {error}");
    self.failures.push(CloneFailure {
      repository: repository.to_string(),
      step,
      error,
    });
  }

  pub fn is_clean(&self) -> bool {
    self.failures.is_empty()
  }

  /// Print one line per failure and a closing count to stderr.
  pub fn print_summary(&self) {
    for failure in &self.failures {
      print_warning(&format!(
        "{}: {} failed: {}",
        format_repo_name(&failure.repository),
        failure.step,
        failure.error
      ));
    }

    let message = format!("Cloned {} of {} repositories", self.cloned, self.attempted);
    if self.is_clean() {
      print_success(&message);
    } else {
      print_error(&format!("{message}, {} step(s) failed", self.failures.len()));
    }
  }
}

/// Clone each repository in order and apply the configured identity.
///
/// When a clone fails the identity is still applied if `<owner>/<name>` is
/// already a checkout, so re-running over existing clones updates them. A
/// directory without its own `.git` is left alone; `git -C` would otherwise
/// write into whatever repository encloses it.
pub fn clone_all<G: GitRunner>(git: &G, repositories: &[Repository], settings: &CloneSettings) -> CloneReport {
  let mut report = CloneReport::default();

  for repository in repositories {
    let dir = repository.full_name.as_str();
    report.attempted += 1;

    let cloned = match repository.clone_url_for(settings.ssh) {
      Some(url) => {
        info!("cloning {} from {}", dir, url);
        git.run(&clone_args(url, dir)).map_err(CloneError::from)
      }
      None => Err(CloneError::MissingUrl),
    };
    let has_checkout = match cloned {
      Ok(()) => {
        report.cloned += 1;
        true
      }
      Err(error) => {
        report.record(dir, CloneStep::Clone, error);
        git.is_repository(dir)
      }
    };
    if !has_checkout {
      debug!("no checkout at {dir}, not setting identity");
      continue;
    }

    let identity = [
      ("user.name", settings.user.as_deref(), CloneStep::UserName),
      ("user.email", settings.email.as_deref(), CloneStep::UserEmail),
    ];
    for (key, value, step) in identity {
      let Some(value) = value else {
        continue;
      };
      debug!("setting {key} in {dir}");
      if let Err(error) = git.run(&config_args(dir, key, value)) {
        report.record(dir, step, error.into());
      }
    }
  }

  report
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::io;

  use gh_core::{ConnectionSettings, Token};

  use super::*;

  /// Records every invocation; fails the ones whose index is listed.
  #[derive(Default)]
  struct RecordingGit {
    calls: RefCell<Vec<Vec<String>>>,
    fail_on: Vec<usize>,
    checkouts: Vec<String>,
  }

  impl RecordingGit {
    fn failing_on(fail_on: &[usize]) -> Self {
      Self {
        fail_on: fail_on.to_vec(),
        ..Self::default()
      }
    }

    fn with_checkouts(mut self, checkouts: &[&str]) -> Self {
      self.checkouts = checkouts.iter().map(|dir| dir.to_string()).collect();
      self
    }

    fn calls(&self) -> Vec<Vec<String>> {
      self.calls.borrow().clone()
    }
  }

  impl GitRunner for RecordingGit {
    fn run(&self, args: &[&str]) -> Result<(), GitError> {
      let mut calls = self.calls.borrow_mut();
      let index = calls.len();
      calls.push(args.iter().map(|arg| arg.to_string()).collect());

      if self.fail_on.contains(&index) {
        return Err(GitError::Spawn {
          args: args.iter().map(|arg| arg.to_string()).collect(),
          source: io::Error::other("fatal: repository not found"),
        });
      }
      Ok(())
    }

    fn is_repository(&self, dir: &str) -> bool {
      self.checkouts.iter().any(|checkout| checkout == dir)
    }
  }

  fn repository(full_name: &str) -> Repository {
    serde_json::from_value(serde_json::json!({
      "name": full_name.rsplit('/').next(),
      "full_name": full_name,
      "owner": {"login": "acme"},
      "html_url": format!("https://github.com/{full_name}"),
      "ssh_url": format!("git@github.com:{full_name}.git"),
      "clone_url": format!("https://github.com/{full_name}.git"),
    }))
    .unwrap()
  }

  fn settings(ssh: bool, user: Option<&str>, email: Option<&str>) -> CloneSettings {
    CloneSettings {
      connection: ConnectionSettings {
        token: Token::new("abc"),
        api_url: None,
      },
      organization: "acme".to_string(),
      ssh,
      user: user.map(str::to_string),
      email: email.map(str::to_string),
    }
  }

  fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
  }

  #[test]
  fn clones_over_ssh_into_full_name() {
    let git = RecordingGit::default();
    let repos = vec![repository("acme/r1"), repository("acme/r2")];

    let report = clone_all(&git, &repos, &settings(true, None, None));

    assert_eq!(
      git.calls(),
      vec![
        args(&["clone", "git@github.com:acme/r1.git", "acme/r1"]),
        args(&["clone", "git@github.com:acme/r2.git", "acme/r2"]),
      ]
    );
    assert_eq!(report.attempted, 2);
    assert_eq!(report.cloned, 2);
    assert!(report.is_clean());
  }

  #[test]
  fn clones_over_https_without_ssh() {
    let git = RecordingGit::default();

    clone_all(&git, &[repository("acme/r1")], &settings(false, None, None));

    assert_eq!(
      git.calls(),
      vec![args(&["clone", "https://github.com/acme/r1.git", "acme/r1"])]
    );
  }

  #[test]
  fn sets_identity_after_clone() {
    let git = RecordingGit::default();

    clone_all(
      &git,
      &[repository("acme/r1")],
      &settings(true, Some("Jane"), Some("jane@example.com")),
    );

    assert_eq!(
      git.calls(),
      vec![
        args(&["clone", "git@github.com:acme/r1.git", "acme/r1"]),
        args(&["-C", "acme/r1", "config", "user.name", "Jane"]),
        args(&["-C", "acme/r1", "config", "user.email", "jane@example.com"]),
      ]
    );
  }

  #[test]
  fn only_configured_identity_keys_are_set() {
    let git = RecordingGit::default();

    clone_all(&git, &[repository("acme/r1")], &settings(true, None, Some("jane@example.com")));

    assert_eq!(git.calls().len(), 2);
    assert_eq!(git.calls()[1], args(&["-C", "acme/r1", "config", "user.email", "jane@example.com"]));
  }

  #[test]
  fn failed_clone_does_not_stop_the_run() {
    // Call 0 is the first clone.
    let git = RecordingGit::failing_on(&[0]);
    let repos = vec![repository("acme/r1"), repository("acme/r2")];

    let report = clone_all(&git, &repos, &settings(true, Some("Jane"), Some("jane@example.com")));

    assert_eq!(
      git.calls(),
      vec![
        args(&["clone", "git@github.com:acme/r1.git", "acme/r1"]),
        args(&["clone", "git@github.com:acme/r2.git", "acme/r2"]),
        args(&["-C", "acme/r2", "config", "user.name", "Jane"]),
        args(&["-C", "acme/r2", "config", "user.email", "jane@example.com"]),
      ]
    );

    assert_eq!(report.attempted, 2);
    assert_eq!(report.cloned, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].repository, "acme/r1");
    assert_eq!(report.failures[0].step, CloneStep::Clone);
    assert!(report.failures[0].error.to_string().contains("repository not found"));
  }

  #[test]
  fn failed_clone_over_existing_checkout_still_sets_identity() {
    let git = RecordingGit::failing_on(&[0]).with_checkouts(&["acme/r1"]);

    let report = clone_all(&git, &[repository("acme/r1")], &settings(true, Some("Jane"), None));

    assert_eq!(
      git.calls(),
      vec![
        args(&["clone", "git@github.com:acme/r1.git", "acme/r1"]),
        args(&["-C", "acme/r1", "config", "user.name", "Jane"]),
      ]
    );
    assert_eq!(report.failures.len(), 1);
  }

  #[test]
  fn config_failures_are_reported_per_step() {
    // Calls: clone r1, user.name r1, user.email r1
    let git = RecordingGit::failing_on(&[2]);

    let report = clone_all(
      &git,
      &[repository("acme/r1")],
      &settings(true, Some("Jane"), Some("jane@example.com")),
    );

    assert_eq!(report.cloned, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].step, CloneStep::UserEmail);
  }

  #[test]
  fn repository_without_url_is_reported() {
    let git = RecordingGit::default();
    let mut repo = repository("acme/r1");
    repo.ssh_url = None;

    let report = clone_all(&git, &[repo], &settings(true, None, None));

    assert!(git.calls().is_empty());
    assert!(matches!(report.failures[0].error, CloneError::MissingUrl));
  }

  #[test]
  fn empty_listing_clones_nothing() {
    let git = RecordingGit::default();

    let report = clone_all(&git, &[], &settings(true, Some("Jane"), None));

    assert!(git.calls().is_empty());
    assert_eq!(report.attempted, 0);
    assert!(report.is_clean());
  }
}
