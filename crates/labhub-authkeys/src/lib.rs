//! OpenSSH `authorized_keys` codec for labhub.
//!
//! Converts between the newline-separated plain-text body served by the
//! key-listing endpoint and typed [`PublicKey`] entries. Pure synchronous;
//! no HTTP dependencies.
//!
//! The wire schema constrains the body to "string" only, so per-line
//! validation is strictly a consumer concern, and this crate is that
//! consumer. Key blobs are checked for base64 alphabet membership at
//! parse time and decoded on demand via [`PublicKey::decode_key`].
//!
//! # Quick start
//!
//! ```
//! let keys = labhub_authkeys::parse(
//!   "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIFo alice@example.com\n",
//! )
//! .unwrap();
//! assert_eq!(keys.entries.len(), 1);
//! assert_eq!(keys.entries[0].comment.as_deref(), Some("alice@example.com"));
//! ```

pub mod error;
mod parse;
mod serialize;

use std::{fmt, str::FromStr};

use base64::{
  Engine as _, alphabet,
  engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub use crate::error::{Error, Result};

/// Standard-alphabet base64 that accepts padded, unpadded, and
/// non-canonical blobs. Real keys are canonically padded; hand-edited
/// files often are not.
const KEY_BLOB_B64: GeneralPurpose = GeneralPurpose::new(
  &alphabet::STANDARD,
  GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true),
);

// ─── Algorithms ──────────────────────────────────────────────────────────────

/// An OpenSSH public-key algorithm identifier, the first mandatory field
/// of an `authorized_keys` entry.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
  IntoStaticStr,
)]
pub enum KeyAlgorithm {
  #[strum(serialize = "ssh-ed25519")]
  Ed25519,
  #[strum(serialize = "ssh-rsa")]
  Rsa,
  #[strum(serialize = "ssh-dss")]
  Dss,
  #[strum(serialize = "ecdsa-sha2-nistp256")]
  EcdsaNistp256,
  #[strum(serialize = "ecdsa-sha2-nistp384")]
  EcdsaNistp384,
  #[strum(serialize = "ecdsa-sha2-nistp521")]
  EcdsaNistp521,
  #[strum(serialize = "sk-ssh-ed25519@openssh.com")]
  SkEd25519,
  #[strum(serialize = "sk-ecdsa-sha2-nistp256@openssh.com")]
  SkEcdsaNistp256,
}

impl KeyAlgorithm {
  /// The identifier as written on the wire.
  pub fn as_str(self) -> &'static str { self.into() }
}

impl Serialize for KeyAlgorithm {
  fn serialize<S>(
    &self,
    serializer: S,
  ) -> std::result::Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for KeyAlgorithm {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Self::from_str(&s).map_err(|_| {
      serde::de::Error::custom(format!("unknown key algorithm {s:?}"))
    })
  }
}

// ─── Entries ─────────────────────────────────────────────────────────────────

/// One `authorized_keys` entry:
/// `[options] algorithm base64-blob [comment]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
  /// Leading login options (`no-pty`, `from="…"`, …), verbatim, in order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub options:   Vec<String>,
  pub algorithm: KeyAlgorithm,
  /// The base64 key blob, as written. Alphabet-checked only; call
  /// [`PublicKey::decode_key`] for the raw bytes.
  pub key:       String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment:   Option<String>,
}

impl PublicKey {
  pub fn new(algorithm: KeyAlgorithm, key: impl Into<String>) -> Self {
    Self { options: Vec::new(), algorithm, key: key.into(), comment: None }
  }

  /// Decode the key blob into raw bytes.
  pub fn decode_key(&self) -> Result<Vec<u8>> {
    Ok(KEY_BLOB_B64.decode(&self.key)?)
  }

  /// Render as a single `authorized_keys` line, without the newline.
  pub fn to_line(&self) -> String { serialize::entry_line(self) }
}

// ─── Documents ───────────────────────────────────────────────────────────────

/// A parsed `authorized_keys` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedKeys {
  pub entries: Vec<PublicKey>,
}

impl AuthorizedKeys {
  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl fmt::Display for AuthorizedKeys {
  /// One entry per line, trailing newline: the exact response body.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&serialize::document(self))
  }
}

impl FromStr for AuthorizedKeys {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { parse(s) }
}

/// Parse an `authorized_keys` document.
///
/// Blank lines and `#` comment lines are skipped; any other malformed
/// line fails the whole parse with its line number.
pub fn parse(input: &str) -> Result<AuthorizedKeys> {
  parse::parse_document(input)
}

// ─── Round-trip test ─────────────────────────────────────────────────────────
