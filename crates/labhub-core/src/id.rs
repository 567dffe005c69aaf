//! Numeric record identifiers.
//!
//! Every persisted record is addressed by a positive 64-bit integer. Zero
//! is never a valid id, so a failed lookup can't be confused with a
//! default-initialised field. Nullable foreign-key positions use
//! [`NullableId`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A record identifier: an integer ≥ 1.
///
/// Ids are assigned by the server; in write-request bodies they only
/// appear as references to existing records.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Id(i64);

impl Id {
  /// Smallest valid id.
  pub const MIN: i64 = 1;

  /// Validate and wrap `value`.
  pub fn new(value: i64) -> Result<Self> {
    if value >= Self::MIN {
      Ok(Self(value))
    } else {
      Err(Error::IdOutOfRange(value))
    }
  }

  pub fn get(self) -> i64 { self.0 }
}

impl TryFrom<i64> for Id {
  type Error = Error;

  fn try_from(value: i64) -> Result<Self> { Self::new(value) }
}

impl From<Id> for i64 {
  fn from(id: Id) -> Self { id.0 }
}

impl fmt::Display for Id {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// An id position that admits `null`: the `ID_null` component.
///
/// `null` deserializes to `None`; anything non-null obeys the [`Id`]
/// rules, so `0` is still rejected.
pub type NullableId = Option<Id>;
