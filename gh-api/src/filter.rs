//! Client-side filtering of listings by owning account.

use tracing::warn;

use crate::models::Repository;

/// Records that may carry an owning account.
pub trait Owned {
  /// Login of the owning account, if the API reported one
  fn owner_login(&self) -> Option<&str>;

  /// Name used when reporting a record
  fn display_name(&self) -> &str;
}

impl Owned for Repository {
  fn owner_login(&self) -> Option<&str> {
    self.owner.as_ref().map(|owner| owner.login.as_str())
  }

  fn display_name(&self) -> &str {
    &self.full_name
  }
}

/// Keep the items whose owner login equals `login` exactly (case-sensitive),
/// preserving their order. Items without an owner are skipped with a
/// warning.
pub fn filter_by_owner<T: Owned>(items: Vec<T>, login: &str) -> Vec<T> {
  items
    .into_iter()
    .filter(|item| match item.owner_login() {
      Some(owner) => owner == login,
      None => {
        warn!("Skipping {} because the API returned it without an owner", item.display_name());
        false
      }
    })
    .collect()
}
