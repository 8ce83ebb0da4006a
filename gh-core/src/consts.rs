//! Constants for the gh tools
//!
//! Environment variable names, file names and other static strings used
//! across the workspace.

/// Name of the config file looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".gh.toml";

/// Prefix of every environment variable the tools read
pub const ENV_PREFIX: &str = "GH_";

/// Log level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Platform-specific Git executable name
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Platform-specific Git executable name
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";
