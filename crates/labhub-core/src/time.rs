//! Server-assigned timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An RFC 3339 timestamp set by the server; clients never supply one in
/// write requests.
pub type ReadOnlyDateTime = DateTime<Utc>;

/// Creation and modification metadata shared by persisted records.
///
/// Both fields are optional: a record that predates timestamp tracking
/// carries neither, and `updated_at` stays unset until the first write
/// after creation.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Timestamps {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<ReadOnlyDateTime>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<ReadOnlyDateTime>,
}

impl Timestamps {
  /// Stamp a freshly created record.
  pub fn created_now() -> Self {
    Self { created_at: Some(Utc::now()), updated_at: None }
  }

  /// Record a modification.
  pub fn touch(&mut self) { self.updated_at = Some(Utc::now()); }
}
