//! Length-bounded strings.
//!
//! The API never accepts unbounded text; every free-text field picks one
//! of the three sizes below. Limits count characters, not bytes, matching
//! how `maxLength` is interpreted by schema validators.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

macro_rules! bounded_string {
  ($(#[$doc:meta])* $name:ident, $max:literal) => {
    $(#[$doc])*
    #[derive(
      Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
    )]
    #[serde(try_from = "String", into = "String")]
    pub struct $name(String);

    impl $name {
      /// Maximum length in characters.
      pub const MAX_LEN: usize = $max;

      /// Validate and wrap `value`.
      pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let len = value.chars().count();
        if len > Self::MAX_LEN {
          return Err(Error::StringTooLong { max: Self::MAX_LEN, len });
        }
        Ok(Self(value))
      }

      pub fn as_str(&self) -> &str { &self.0 }

      pub fn into_inner(self) -> String { self.0 }
    }

    impl TryFrom<String> for $name {
      type Error = Error;

      fn try_from(value: String) -> Result<Self> { Self::new(value) }
    }

    impl From<$name> for String {
      fn from(value: $name) -> Self { value.0 }
    }

    impl std::str::FromStr for $name {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self> { Self::new(s) }
    }

    impl AsRef<str> for $name {
      fn as_ref(&self) -> &str { &self.0 }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }
  };
}

bounded_string!(
  /// Short text: names, labels, hostname-ish fields.
  String64, 64
);

bounded_string!(
  /// Medium text: titles and one-line summaries.
  String128, 128
);

bounded_string!(
  /// Long text: descriptions and free-form notes.
  String1024, 1024
);
