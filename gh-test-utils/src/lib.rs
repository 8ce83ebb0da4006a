//! Test utilities shared across the gh workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary config files ([`ConfigFileGuard`])
//! - Local git repositories to clone from ([`SourceRepoGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod git;

// Re-export commonly used items
pub use config::ConfigFileGuard;
pub use git::{SourceRepoGuard, create_commit};
