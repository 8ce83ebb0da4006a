//! # gh Command-Line Tools
//!
//! The three gh front-ends, each a thin sequential script over the GitHub
//! client:
//!
//! - `gh-clone` clones every repository of an organization
//! - `gh-foreach-repository` prints every accessible repository as JSON lines
//! - `gh-gists` prints the gists of a user as JSON lines
//!
//! The binaries in `src/bin` only parse arguments and call into this library.

pub mod cli;
pub mod clients;
pub mod clone;
pub mod gists;
pub mod records;
pub mod repositories;
