use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account that owns a repository or gist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
  pub login: String,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Represents a GitHub repository.
///
/// Only the fields the tools act on are typed; everything else the API sent
/// is kept in `extra` so the record can be written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
  pub name: String,
  pub full_name: String,
  pub owner: Option<Owner>,
  pub html_url: String,
  pub ssh_url: Option<String>,
  pub clone_url: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Repository {
  /// URL to clone from: the SSH form, or the HTTPS form (falling back to the
  /// web URL, which git also accepts).
  pub fn clone_url_for(&self, ssh: bool) -> Option<&str> {
    if ssh {
      self.ssh_url.as_deref()
    } else {
      self.clone_url.as_deref().or(Some(self.html_url.as_str()))
    }
  }
}

/// Represents a GitHub gist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gist {
  pub id: String,
  pub owner: Option<Owner>,
  pub html_url: String,
  pub description: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}
