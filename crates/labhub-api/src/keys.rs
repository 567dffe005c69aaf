//! The SSH key-listing response.

use axum::{
  http::{HeaderValue, header},
  response::{IntoResponse, Response},
};
use labhub_authkeys::AuthorizedKeys;

/// A plain-text `authorized_keys` response body.
///
/// Newline-separated public-key entries. The wire schema constrains the
/// body to "string" only, so a preformatted body is served verbatim;
/// build from [`AuthorizedKeys`] when the entries are typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshAuthorizedKeys(String);

impl SshAuthorizedKeys {
  pub fn new(body: impl Into<String>) -> Self { Self(body.into()) }

  pub fn body(&self) -> &str { &self.0 }
}

impl From<AuthorizedKeys> for SshAuthorizedKeys {
  fn from(keys: AuthorizedKeys) -> Self { Self(keys.to_string()) }
}

impl From<String> for SshAuthorizedKeys {
  fn from(body: String) -> Self { Self(body) }
}

impl IntoResponse for SshAuthorizedKeys {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
      self.0,
    )
      .into_response()
  }
}
