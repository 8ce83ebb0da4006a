//! # Command Line Interface
//!
//! Argument definitions for the gh tools. Every tool shares [`CommonArgs`];
//! the tool-specific flags are folded into a [`Settings`] layer that takes
//! precedence over the environment and the config file.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use gh_core::Settings;
use gh_core::logging::{init_tracing, parse_level};
use gh_core::output::cli_styles;
use tracing::debug;

/// Parse the process arguments.
///
/// `--help` and `--version` print and exit successfully; any other argument
/// error is returned so the tool exits with status 1.
pub fn parse_args<P: Parser>() -> Result<P> {
  parse_args_from(std::env::args_os())
}

/// [`parse_args`] over an explicit argument list
pub fn parse_args_from<P, I, T>(args: I) -> Result<P>
where
  P: Parser,
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  match P::try_parse_from(args) {
    Ok(cli) => Ok(cli),
    Err(err) if !err.use_stderr() => err.exit(),
    Err(err) => Err(err.into()),
  }
}

/// Flags understood by every gh tool
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
  /// Path to the config file [default: ~/.gh.toml]
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// GitHub access token
  #[arg(short = 't', long, value_name = "TOKEN")]
  pub token: Option<String>,

  /// Log level: off, trace, debug, info, warn or error
  #[arg(short = 'l', long = "log-level", value_name = "LEVEL")]
  pub log_level: Option<String>,

  /// Root of the GitHub REST API, for GitHub Enterprise
  #[arg(long = "api-url", value_name = "URL")]
  pub api_url: Option<String>,
}

impl CommonArgs {
  /// Resolve settings from the config file, the `GH_*` environment and the
  /// given flag layer, then start tracing at the configured level.
  pub fn load(&self, flags: Settings) -> Result<Settings> {
    let flags = Settings {
      token: self.token.clone(),
      log_level: self.log_level.clone(),
      api_url: self.api_url.clone(),
      ..flags
    };

    let settings = Settings::resolve(self.config.as_deref(), |key| std::env::var(key).ok(), flags)
      .context("error reading configuration")?;

    let level = parse_level(settings.log_level()).context("error reading configuration")?;
    init_tracing(level);

    match self.config.as_deref() {
      Some(path) => debug!("Configuration resolved with config file {}", path.display()),
      None => debug!("Configuration resolved with the default config file location"),
    }

    Ok(settings)
  }
}

/// Clone all repositories of an organization
#[derive(Parser, Debug)]
#[command(
  name = "gh-clone",
  about = "Clone every repository of a GitHub organization",
  long_about = "Clone every repository owned by a GitHub organization into <owner>/<name> below the\n\
                current directory.\n\n\
                Optionally sets a local user.name and user.email in each clone. A repository that\n\
                fails to clone does not stop the run; failures are summarised at the end.",
  version,
  styles = cli_styles(),
)]
pub struct CloneCli {
  #[command(flatten)]
  pub common: CommonArgs,

  /// Organization whose repositories are cloned
  #[arg(short = 'o', long, value_name = "ORG")]
  pub organization: Option<String>,

  /// Clone over SSH (the default)
  #[arg(long, overrides_with = "no_ssh")]
  pub ssh: bool,

  /// Clone over HTTPS instead of SSH
  #[arg(long = "no-ssh", overrides_with = "ssh")]
  pub no_ssh: bool,

  /// user.name to set in each clone
  #[arg(long, value_name = "NAME")]
  pub user: Option<String>,

  /// user.email to set in each clone
  #[arg(long, value_name = "EMAIL")]
  pub email: Option<String>,
}

impl CloneCli {
  /// The settings layer contributed by the clone flags
  pub fn flags(&self) -> Settings {
    let clone_ssh = match (self.ssh, self.no_ssh) {
      (true, _) => Some(true),
      (_, true) => Some(false),
      _ => None,
    };

    Settings {
      clone_organization: self.organization.clone(),
      clone_ssh: clone_ssh.map(|ssh: bool| ssh.to_string()),
      clone_user: self.user.clone(),
      clone_email: self.email.clone(),
      ..Settings::default()
    }
  }
}

/// List accessible repositories
#[derive(Parser, Debug)]
#[command(
  name = "gh-foreach-repository",
  about = "Print every repository you can access, one JSON record per line",
  version,
  styles = cli_styles(),
)]
pub struct RepositoriesCli {
  #[command(flatten)]
  pub common: CommonArgs,

  /// Affiliation filter passed to GitHub (e.g. owner,collaborator)
  #[arg(short = 'a', long, value_name = "AFFILIATION")]
  pub affiliation: Option<String>,

  /// Visibility filter passed to GitHub (all, public or private)
  #[arg(short = 'v', long, value_name = "VISIBILITY")]
  pub visibility: Option<String>,
}

impl RepositoriesCli {
  pub fn flags(&self) -> Settings {
    Settings {
      affiliation: self.affiliation.clone(),
      visibility: self.visibility.clone(),
      ..Settings::default()
    }
  }
}

/// List gists
#[derive(Parser, Debug)]
#[command(
  name = "gh-gists",
  about = "Print the gists of a user, one JSON record per line",
  long_about = "Print gists as JSON lines.\n\n\
                Without an organization the authenticated user's gists are listed, otherwise\n\
                the public gists of the named account.",
  version,
  styles = cli_styles(),
)]
pub struct GistsCli {
  #[command(flatten)]
  pub common: CommonArgs,

  /// Account whose public gists are listed [default: the authenticated user]
  #[arg(short = 'o', long, value_name = "ORG")]
  pub organization: Option<String>,
}

impl GistsCli {
  pub fn flags(&self) -> Settings {
    Settings {
      gists_organization: self.organization.clone(),
      ..Settings::default()
    }
  }
}
