//! Renderer for `authorized_keys` lines.

use crate::{AuthorizedKeys, PublicKey};

/// Render one entry as a single line, without the newline.
pub(crate) fn entry_line(key: &PublicKey) -> String {
  let mut line = String::new();

  if !key.options.is_empty() {
    line.push_str(&key.options.join(","));
    line.push(' ');
  }

  line.push_str(key.algorithm.as_str());
  line.push(' ');
  line.push_str(&key.key);

  if let Some(comment) = &key.comment {
    line.push(' ');
    line.push_str(comment);
  }

  line
}

/// Render the whole document: one entry per line, trailing newline.
pub(crate) fn document(keys: &AuthorizedKeys) -> String {
  let mut out = String::new();
  for entry in &keys.entries {
    out.push_str(&entry_line(entry));
    out.push('\n');
  }
  out
}
