//! # Pagination
//!
//! GitHub list endpoints return at most `per_page` items per response and
//! advertise the following page through the `Link` header. [`collect_pages`]
//! drives any page-fetching function to completion and concatenates the
//! results in the order they were received.

use std::collections::HashSet;
use std::future::Future;

use url::Url;

use crate::error::{GitHubError, Result};

/// One fetched batch of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
  pub items: Vec<T>,
  /// Page number to request next; `None` once the last page has been seen.
  pub next_page: Option<u32>,
}

impl<T> Page<T> {
  /// A page that is also the last one
  pub fn last(items: Vec<T>) -> Self {
    Self { items, next_page: None }
  }

  /// A page followed by page `next_page`
  pub fn followed_by(items: Vec<T>, next_page: u32) -> Self {
    Self {
      items,
      next_page: Some(next_page),
    }
  }
}

/// Fetch every page and return all items in fetch order.
///
/// `fetch` is first called with `None` (the implicit first page) and then
/// with each `next_page` it reports, until a page reports none. The first
/// error is returned as-is and everything accumulated so far is dropped.
/// A server that offers a page number it already served is treated as an
/// error rather than looped on.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
  F: FnMut(Option<u32>) -> Fut,
  Fut: Future<Output = Result<Page<T>>>,
{
  let mut items = Vec::new();
  // The request without a page parameter is page 1.
  let mut fetched = HashSet::from([1]);
  let mut page = None;

  loop {
    let batch = fetch(page).await?;
    items.extend(batch.items);

    match batch.next_page {
      None => return Ok(items),
      Some(next) if !fetched.insert(next) => return Err(GitHubError::PaginationLoop { page: next }),
      Some(next) => page = Some(next),
    }
  }
}

/// Extract the `rel="next"` page number from a GitHub `Link` header.
///
/// GitHub Link headers look like:
/// `<https://api.github.com/user/repos?per_page=10&page=2>; rel="next", <...&page=5>; rel="last"`
pub fn next_page_from_link(link_header: &str) -> Option<u32> {
  link_header.split(',').find_map(|part| {
    let mut segments = part.split(';').map(str::trim);
    let target = segments.next()?.strip_prefix('<')?.strip_suffix('>')?;

    let is_next = segments
      .filter_map(|segment| segment.strip_prefix("rel="))
      .any(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"));
    if !is_next {
      return None;
    }

    Url::parse(target)
      .ok()?
      .query_pairs()
      .find(|(key, _)| key == "page")
      .and_then(|(_, value)| value.parse::<u32>().ok())
      .filter(|page| *page > 0)
  })
}
