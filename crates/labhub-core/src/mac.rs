//! MAC addresses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A colon-separated IEEE 802 MAC address, e.g. `11:22:33:44:55:66`.
///
/// Exactly 17 characters: six groups of two hex digits. Both hex cases
/// are admitted and the original spelling is kept verbatim, so a value
/// serializes back out exactly as it came in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
  /// Length of the textual form.
  pub const LEN: usize = 17;
  /// The pattern published in the component catalog.
  pub const PATTERN: &str = "^([A-Fa-f0-9]{2}:){5}[A-Fa-f0-9]{2}$";

  /// Validate and wrap `value`.
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    if value.len() != Self::LEN {
      return Err(Error::MacAddressLength(value.len()));
    }
    // Positions 2, 5, 8, 11, 14 are separators; the rest are hex digits.
    for (i, &b) in value.as_bytes().iter().enumerate() {
      let ok = if i % 3 == 2 {
        b == b':'
      } else {
        b.is_ascii_hexdigit()
      };
      if !ok {
        return Err(Error::MacAddressPattern(value));
      }
    }
    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for MacAddress {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::new(value) }
}

impl From<MacAddress> for String {
  fn from(mac: MacAddress) -> Self { mac.0 }
}

impl std::str::FromStr for MacAddress {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::new(s) }
}

impl fmt::Display for MacAddress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_well_formed_addresses() {
    for mac in ["11:22:33:44:55:66", "aa:bb:cc:dd:ee:ff", "AA:0b:C1:d2:E3:f4"]
    {
      let parsed = MacAddress::new(mac).unwrap();
      assert_eq!(parsed.as_str(), mac);
    }
  }

  #[test]
  fn rejects_short_address() {
    assert_eq!(
      MacAddress::new("11:22:33:44:55:6"),
      Err(Error::MacAddressLength(16)),
    );
  }

  #[test]
  fn rejects_non_hex_digits() {
    assert_eq!(
      MacAddress::new("GG:22:33:44:55:66"),
      Err(Error::MacAddressPattern("GG:22:33:44:55:66".to_string())),
    );
  }

  #[test]
  fn rejects_wrong_separator() {
    assert!(MacAddress::new("11-22-33-44-55-66").is_err());
  }

  #[test]
  fn round_trips_through_serde_verbatim() {
    let json = "\"Ab:cD:12:34:56:78\"";
    let mac: MacAddress = serde_json::from_str(json).unwrap();
    assert_eq!(serde_json::to_string(&mac).unwrap(), json);
  }

  #[test]
  fn deserialization_rejects_malformed_values() {
    assert!(serde_json::from_str::<MacAddress>("\"112233445566\"").is_err());
  }
}
