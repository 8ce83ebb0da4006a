//! # GitHub API Client
//!
//! Provides the small slice of the GitHub REST API the gh helpers need:
//! listing the repositories visible to the authenticated user, listing the
//! repositories owned by one organization, and listing gists. Every listing
//! walks the paginated endpoint to completion before returning.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;

// Re-export the client
pub use client::{GitHubClient, connect};
pub use gh_core::creds::Token;
pub use error::{GitHubError, Result};
pub use filter::filter_by_owner;
// Re-export models
pub use models::{Gist, Owner, Repository};
pub use pagination::{Page, collect_pages};
