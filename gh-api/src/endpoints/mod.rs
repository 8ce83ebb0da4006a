//! # GitHub API Endpoints
//!
//! Listing endpoints for the resource types the tools enumerate.

pub mod gists;
pub mod repos;

#[cfg(test)]
mod tests;
