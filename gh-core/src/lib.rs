//! # gh Core Library
//!
//! Plumbing shared by the gh command-line tools: layered configuration,
//! credentials, tracing setup, `git` invocation and terminal output.

pub mod config;
pub mod consts;
pub mod creds;
pub mod git;
pub mod logging;
pub mod output;

pub use config::{
  CloneSettings, ConfigError, ConnectionSettings, GistListSettings, RepositoryListSettings, Settings, require,
};
pub use creds::Token;
