//! Error types for `labhub-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("id must be at least 1, got {0}")]
  IdOutOfRange(i64),

  #[error("MAC address must be 17 characters, got {0}")]
  MacAddressLength(usize),

  #[error("malformed MAC address: {0:?}")]
  MacAddressPattern(String),

  #[error("string exceeds {max} characters (got {len})")]
  StringTooLong { max: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
