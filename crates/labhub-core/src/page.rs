//! The list-response envelope.

use serde::{Deserialize, Serialize};

/// Records per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

/// The uniform wrapper for list responses: one page of records plus the
/// total count across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
  pub data:  Vec<T>,
  pub total: u64,
}

impl<T> Page<T> {
  pub fn new(data: Vec<T>, total: u64) -> Self { Self { data, total } }

  /// An empty result set.
  pub fn empty() -> Self { Self { data: Vec::new(), total: 0 } }
}
