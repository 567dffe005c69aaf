//! Boolean flags with a `true` default.

use serde::{Deserialize, Serialize};

/// A boolean that is on unless explicitly switched off.
///
/// Used for fields that default to `true` when a request body omits them;
/// pair with `#[serde(default)]` on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoolDefaultTrue(pub bool);

impl BoolDefaultTrue {
  pub fn get(self) -> bool { self.0 }
}

impl Default for BoolDefaultTrue {
  fn default() -> Self { Self(true) }
}

impl From<bool> for BoolDefaultTrue {
  fn from(value: bool) -> Self { Self(value) }
}

impl From<BoolDefaultTrue> for bool {
  fn from(flag: BoolDefaultTrue) -> Self { flag.0 }
}
