//! Line parser for the OpenSSH `authorized_keys` grammar.
//!
//! Each non-blank, non-`#` line is:
//!
//! ```text
//! [options] algorithm base64-blob [comment]
//! ```
//!
//! The options field is comma-separated and may contain double-quoted
//! strings with embedded spaces and commas (`from="10.0.0.0/8,…"`), so
//! field splitting must respect quotes. Whether a line starts with
//! options is decided the way OpenSSH decides it: if the first token is
//! not a known key type, it must be the options field.

use std::str::FromStr;

use crate::{
  AuthorizedKeys, KeyAlgorithm, PublicKey,
  error::{Error, Result},
};

// ─── Document level ──────────────────────────────────────────────────────────

pub(crate) fn parse_document(input: &str) -> Result<AuthorizedKeys> {
  let mut entries = Vec::new();
  for (idx, raw) in input.lines().enumerate() {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    entries.push(parse_entry(line, idx + 1)?);
  }
  Ok(AuthorizedKeys { entries })
}

// ─── Entry level ─────────────────────────────────────────────────────────────

pub(crate) fn parse_entry(line: &str, lineno: usize) -> Result<PublicKey> {
  let (first, rest) = split_field(line, lineno)?;

  let (options, algorithm, rest) = match KeyAlgorithm::from_str(first) {
    Ok(algorithm) => (Vec::new(), algorithm, rest),
    // Not a key type, so it must be the options field.
    Err(_) => {
      let rest =
        rest.ok_or(Error::MissingKeyMaterial { line: lineno })?;
      let (token, rest) = split_field(rest, lineno)?;
      let algorithm =
        KeyAlgorithm::from_str(token).map_err(|_| Error::UnknownAlgorithm {
          line:  lineno,
          token: token.to_string(),
        })?;
      (split_options(first), algorithm, rest)
    }
  };

  let rest = rest.ok_or(Error::MissingKeyMaterial { line: lineno })?;
  let (blob, comment) = match rest.split_once(char::is_whitespace) {
    Some((blob, tail)) => {
      let tail = tail.trim();
      (blob, (!tail.is_empty()).then(|| tail.to_string()))
    }
    None => (rest, None),
  };

  if let Some(found) = blob.chars().find(|&c| !is_base64_char(c)) {
    return Err(Error::InvalidKeyMaterial { line: lineno, found });
  }

  Ok(PublicKey { options, algorithm, key: blob.to_string(), comment })
}

// ─── Field splitting ─────────────────────────────────────────────────────────

/// Split off the first whitespace-delimited field, respecting double
/// quotes. Returns the field and the trimmed remainder, if any.
fn split_field(s: &str, lineno: usize) -> Result<(&str, Option<&str>)> {
  let mut in_quotes = false;
  for (i, c) in s.char_indices() {
    match c {
      '"' => in_quotes = !in_quotes,
      c if c.is_whitespace() && !in_quotes => {
        let rest = s[i..].trim_start();
        let rest = (!rest.is_empty()).then_some(rest);
        return Ok((&s[..i], rest));
      }
      _ => {}
    }
  }
  if in_quotes {
    return Err(Error::UnterminatedQuote { line: lineno });
  }
  Ok((s, None))
}

/// Split the options field on commas outside double quotes.
fn split_options(s: &str) -> Vec<String> {
  let mut out = Vec::new();
  let mut current = String::new();
  let mut in_quotes = false;

  for c in s.chars() {
    match c {
      '"' => {
        in_quotes = !in_quotes;
        current.push(c);
      }
      ',' if !in_quotes => out.push(std::mem::take(&mut current)),
      _ => current.push(c),
    }
  }
  if !current.is_empty() {
    out.push(current);
  }
  out
}

fn is_base64_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}
