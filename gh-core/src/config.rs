//! # Configuration Management
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, `GH_*` environment variables, and the `~/.gh.toml` config file.
//! The layers are merged into one [`Settings`] value, which is then turned
//! into the typed, validated settings each tool needs.
//!
//! ```toml
//! token = "ghp_..."
//! log-level = "info"
//!
//! [clone]
//! organization = "acme"
//! ssh = true
//!
//! [foreach.repository]
//! affiliation = "owner"
//! visibility = "all"
//!
//! [gists]
//! organization = "octocat"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::consts::{CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, ENV_PREFIX};
use crate::creds::Token;

/// Errors raised while reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// A required setting is absent or blank.
  #[error("required key {key} not present")]
  MissingSetting { key: &'static str },

  #[error("failed to read config file {}: {source}", .path.display())]
  ReadFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config file {}: {source}", .path.display())]
  ParseFile {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
  InvalidLogLevel(String),

  #[error("invalid boolean '{value}' for {key}")]
  InvalidBool { key: String, value: String },

  #[error("could not determine the home directory")]
  NoHomeDirectory,
}

/// Trim spaces and tabs from a required setting and fail if nothing is left.
pub fn require(key: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
  let trimmed = value.unwrap_or_default().trim_matches([' ', '\t']);
  if trimmed.is_empty() {
    return Err(ConfigError::MissingSetting { key });
  }
  Ok(trimmed.to_string())
}

/// Every setting the tools know about, each optional.
///
/// One value is built per layer (file, environment, flags); [`Settings::merge`]
/// combines them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Settings {
  pub token: Option<String>,
  pub log_level: Option<String>,
  pub api_url: Option<String>,
  pub clone_organization: Option<String>,
  /// Raw `clone.ssh` value; only `gh-clone` interprets it
  pub clone_ssh: Option<String>,
  pub clone_user: Option<String>,
  pub clone_email: Option<String>,
  pub affiliation: Option<String>,
  pub visibility: Option<String>,
  pub gists_organization: Option<String>,
}

/// Connection details shared by every tool
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSettings {
  pub token: Token,
  pub api_url: Option<String>,
}

/// Settings for `gh-clone`
#[derive(Debug, Clone, PartialEq)]
pub struct CloneSettings {
  pub connection: ConnectionSettings,
  pub organization: String,
  pub ssh: bool,
  pub user: Option<String>,
  pub email: Option<String>,
}

/// Settings for `gh-foreach-repository`
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryListSettings {
  pub connection: ConnectionSettings,
  pub affiliation: String,
  pub visibility: String,
}

/// Settings for `gh-gists`
#[derive(Debug, Clone, PartialEq)]
pub struct GistListSettings {
  pub connection: ConnectionSettings,
  /// Empty means the authenticated user
  pub organization: String,
}

impl Settings {
  /// Load settings from every layer: `config_path` (or `~/.gh.toml`), then
  /// the environment as seen through `env`, then `flags`.
  pub fn resolve<F>(config_path: Option<&Path>, env: F, flags: Settings) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let file = match config_path {
      Some(path) => Self::from_file(path)?,
      None => {
        let path = default_config_path()?;
        if path.exists() {
          Self::from_file(&path)?
        } else {
          Self::default()
        }
      }
    };

    Ok(file.merge(Self::from_env(env)).merge(flags))
  }

  /// Read a TOML config file. The file must exist.
  pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
      path: path.to_path_buf(),
      source,
    })?;
    let file: FileConfig = toml::from_str(&contents).map_err(|source| ConfigError::ParseFile {
      path: path.to_path_buf(),
      source,
    })?;

    Ok(file.into())
  }

  /// Read `GH_*` variables through `env`. Empty values count as unset.
  pub fn from_env<F>(env: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| env(&format!("{ENV_PREFIX}{key}")).filter(|value| !value.is_empty());

    Self {
      token: var("TOKEN"),
      log_level: var("LOG_LEVEL"),
      api_url: var("API_URL"),
      clone_organization: var("CLONE_ORGANIZATION"),
      clone_ssh: var("CLONE_SSH"),
      clone_user: var("CLONE_USER"),
      clone_email: var("CLONE_EMAIL"),
      affiliation: var("FOREACH_REPOSITORY_AFFILIATION"),
      visibility: var("FOREACH_REPOSITORY_VISIBILITY"),
      gists_organization: var("GISTS_ORGANIZATION"),
    }
  }

  /// Overlay `higher` on top of `self`; values set in `higher` win.
  pub fn merge(self, higher: Settings) -> Self {
    Self {
      token: higher.token.or(self.token),
      log_level: higher.log_level.or(self.log_level),
      api_url: higher.api_url.or(self.api_url),
      clone_organization: higher.clone_organization.or(self.clone_organization),
      clone_ssh: higher.clone_ssh.or(self.clone_ssh),
      clone_user: higher.clone_user.or(self.clone_user),
      clone_email: higher.clone_email.or(self.clone_email),
      affiliation: higher.affiliation.or(self.affiliation),
      visibility: higher.visibility.or(self.visibility),
      gists_organization: higher.gists_organization.or(self.gists_organization),
    }
  }

  /// The configured log level name, defaulting to `warn`
  pub fn log_level(&self) -> &str {
    self
      .log_level
      .as_deref()
      .map(str::trim)
      .filter(|level| !level.is_empty())
      .unwrap_or(DEFAULT_LOG_LEVEL)
  }

  /// Token and API root; fails when no token is configured.
  pub fn connection(&self) -> Result<ConnectionSettings, ConfigError> {
    let token = require("token", self.token.as_deref())?;
    let api_url = self
      .api_url
      .as_deref()
      .map(str::trim)
      .filter(|url| !url.is_empty())
      .map(str::to_string);

    Ok(ConnectionSettings {
      token: Token::new(token),
      api_url,
    })
  }

  pub fn clone_settings(&self) -> Result<CloneSettings, ConfigError> {
    let connection = self.connection()?;
    let organization = require("clone.organization", self.clone_organization.as_deref())?;
    let ssh = match self.clone_ssh.as_deref().map(str::trim) {
      Some(value) if !value.is_empty() => parse_bool("clone.ssh", value)?,
      _ => true,
    };

    Ok(CloneSettings {
      connection,
      organization,
      ssh,
      user: non_empty(self.clone_user.as_deref()),
      email: non_empty(self.clone_email.as_deref()),
    })
  }

  pub fn repository_list_settings(&self) -> Result<RepositoryListSettings, ConfigError> {
    Ok(RepositoryListSettings {
      connection: self.connection()?,
      affiliation: self.affiliation.clone().unwrap_or_default(),
      visibility: self.visibility.clone().unwrap_or_default(),
    })
  }

  pub fn gist_list_settings(&self) -> Result<GistListSettings, ConfigError> {
    Ok(GistListSettings {
      connection: self.connection()?,
      organization: self.gists_organization.clone().unwrap_or_default(),
    })
  }
}

/// `~/.gh.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
  let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
  Ok(base_dirs.home_dir().join(CONFIG_FILE_NAME))
}

fn non_empty(value: Option<&str>) -> Option<String> {
  value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "true" | "1" | "yes" | "on" => Ok(true),
    "false" | "0" | "no" | "off" => Ok(false),
    _ => Err(ConfigError::InvalidBool {
      key: key.to_string(),
      value: value.to_string(),
    }),
  }
}

/// On-disk layout of `~/.gh.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FileConfig {
  token: Option<String>,
  log_level: Option<String>,
  api_url: Option<String>,
  #[serde(default)]
  clone: CloneSection,
  #[serde(default)]
  foreach: ForeachSection,
  #[serde(default)]
  gists: GistsSection,
}

#[derive(Debug, Default, Deserialize)]
struct CloneSection {
  organization: Option<String>,
  /// `true`/`false`, or a string such as `"yes"`
  ssh: Option<toml::Value>,
  user: Option<String>,
  email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ForeachSection {
  #[serde(default)]
  repository: RepositorySection,
}

#[derive(Debug, Default, Deserialize)]
struct RepositorySection {
  affiliation: Option<String>,
  visibility: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GistsSection {
  organization: Option<String>,
}

impl From<FileConfig> for Settings {
  fn from(file: FileConfig) -> Self {
    Self {
      token: file.token,
      log_level: file.log_level,
      api_url: file.api_url,
      clone_organization: file.clone.organization,
      clone_ssh: file.clone.ssh.map(|value| match value {
        toml::Value::String(text) => text,
        other => other.to_string(),
      }),
      clone_user: file.clone.user,
      clone_email: file.clone.email,
      affiliation: file.foreach.repository.affiliation,
      visibility: file.foreach.repository.visibility,
      gists_organization: file.gists.organization,
    }
  }
}
