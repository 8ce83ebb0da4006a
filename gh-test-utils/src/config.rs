//! Config file management for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for a test `.gh.toml`
///
/// Writes the given content to a config file inside a fresh temporary
/// directory. The directory (and file) are removed when the guard is dropped.
/// Tests pass [`ConfigFileGuard::path`] explicitly instead of touching HOME.
pub struct ConfigFileGuard {
  temp_dir: TempDir,
  config_path: PathBuf,
}

impl ConfigFileGuard {
  /// Create a new config file with the given content
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join(".gh.toml");
    fs::write(&config_path, content).expect("Failed to write test config file");

    Self { temp_dir, config_path }
  }

  /// Get the path to the config file
  pub fn path(&self) -> &Path {
    &self.config_path
  }

  /// Get the directory holding the config file
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
