//! Error types for the `authorized_keys` codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("line {line}: unknown key algorithm {token:?}")]
  UnknownAlgorithm { line: usize, token: String },

  #[error("line {line}: missing key material after algorithm")]
  MissingKeyMaterial { line: usize },

  #[error("line {line}: key material contains non-base64 character {found:?}")]
  InvalidKeyMaterial { line: usize, found: char },

  #[error("line {line}: unterminated double quote in options")]
  UnterminatedQuote { line: usize },

  #[error("key blob does not decode as base64: {0}")]
  KeyDecode(#[from] base64::DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
