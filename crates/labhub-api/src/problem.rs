//! RFC 7807 problem details: the error payload for every endpoint.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Media type registered by RFC 7807.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// A problem-details body.
///
/// No field is required on the wire, and consumers must not assume any is
/// present except by contract at the call site. Members outside the four
/// recognized ones land in `extensions` and survive a round trip intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
  /// URI reference identifying the problem type.
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub type_:      Option<String>,
  /// Short human-readable summary.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title:      Option<String>,
  /// Human-readable explanation specific to this occurrence.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub detail:     Option<String>,
  /// HTTP status code, echoed in the body.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:     Option<u16>,
  /// Extension members (RFC 7807 §3.2), preserved verbatim.
  #[serde(flatten)]
  pub extensions: Map<String, Value>,
}

impl Problem {
  /// The type a consumer should assume when none is given (RFC 7807 §4.2).
  pub const BLANK_TYPE: &str = "about:blank";

  pub fn new(status: u16, title: impl Into<String>) -> Self {
    Self {
      status: Some(status),
      title: Some(title.into()),
      ..Self::default()
    }
  }

  // The status/title shapes the API actually returns.

  pub fn bad_request(detail: impl Into<String>) -> Self {
    Self::new(400, "Bad Request").with_detail(detail)
  }

  pub fn unauthorized(detail: impl Into<String>) -> Self {
    Self::new(401, "Unauthorized").with_detail(detail)
  }

  pub fn forbidden(detail: impl Into<String>) -> Self {
    Self::new(403, "Forbidden").with_detail(detail)
  }

  pub fn not_found(detail: impl Into<String>) -> Self {
    Self::new(404, "Not Found").with_detail(detail)
  }

  pub fn internal_server_error(detail: impl Into<String>) -> Self {
    Self::new(500, "Internal Server Error").with_detail(detail)
  }

  pub fn with_type(mut self, type_: impl Into<String>) -> Self {
    self.type_ = Some(type_.into());
    self
  }

  pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
    self.detail = Some(detail.into());
    self
  }

  /// Attach an extension member.
  pub fn with_extension(
    mut self,
    key: impl Into<String>,
    value: impl Into<Value>,
  ) -> Self {
    self.extensions.insert(key.into(), value.into());
    self
  }

  /// The problem type, with the `about:blank` default applied.
  pub fn type_or_blank(&self) -> &str {
    self.type_.as_deref().unwrap_or(Self::BLANK_TYPE)
  }

  /// Status for the response line; a body that doesn't say (or says
  /// something unintelligible) renders as a 500.
  fn response_status(&self) -> StatusCode {
    self
      .status
      .and_then(|s| StatusCode::from_u16(s).ok())
      .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
  }
}

impl IntoResponse for Problem {
  fn into_response(self) -> Response {
    let status = self.response_status();
    let mut response = (status, Json(self)).into_response();
    response.headers_mut().insert(
      header::CONTENT_TYPE,
      HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
    );
    response
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  /// The example published with the response template.
  const EXAMPLE: &str = r#"{"detail":"Invalid token","status":401,"title":"Unauthorized","type":"about:blank"}"#;

  #[test]
  fn published_example_round_trips_unchanged() {
    let problem: Problem = serde_json::from_str(EXAMPLE).unwrap();
    assert_eq!(problem.status, Some(401));
    assert_eq!(problem.title.as_deref(), Some("Unauthorized"));
    assert_eq!(problem.detail.as_deref(), Some("Invalid token"));
    assert_eq!(problem.type_.as_deref(), Some("about:blank"));

    let reserialized: Value =
      serde_json::to_value(&problem).unwrap();
    let original: Value = serde_json::from_str(EXAMPLE).unwrap();
    assert_eq!(reserialized, original);
  }

  #[test]
  fn unknown_members_are_preserved() {
    let wire = json!({
      "title": "Unprocessable",
      "status": 422,
      "balance": 30,
      "accounts": ["/account/12345"],
    });
    let problem: Problem = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(problem.extensions["balance"], json!(30));
    assert_eq!(serde_json::to_value(&problem).unwrap(), wire);
  }

  #[test]
  fn no_field_is_required() {
    let problem: Problem = serde_json::from_str("{}").unwrap();
    assert_eq!(problem, Problem::default());
    assert_eq!(serde_json::to_string(&problem).unwrap(), "{}");
  }

  #[test]
  fn type_defaults_to_about_blank_for_consumers() {
    let problem = Problem::new(404, "Not Found");
    assert_eq!(problem.type_, None);
    assert_eq!(problem.type_or_blank(), "about:blank");
  }

  #[test]
  fn constructors_echo_status_in_the_body() {
    let problem = Problem::not_found("Cluster 42 does not exist");
    assert_eq!(problem.status, Some(404));
    assert_eq!(problem.title.as_deref(), Some("Not Found"));
    assert_eq!(problem.detail.as_deref(), Some("Cluster 42 does not exist"));
  }

  #[tokio::test]
  async fn renders_with_problem_json_content_type() {
    let response = Problem::unauthorized("Invalid token").into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
      response.headers().get(header::CONTENT_TYPE).unwrap(),
      PROBLEM_CONTENT_TYPE,
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!(401));
    assert_eq!(body["title"], json!("Unauthorized"));
  }

  #[tokio::test]
  async fn bodies_without_a_status_render_as_500() {
    let response = Problem::default().into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
