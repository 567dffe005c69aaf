//! API error type and its problem-details rendering.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::problem::Problem;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("unauthorized: {0}")]
  Unauthorized(String),

  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// The problem body this error renders as.
  pub fn to_problem(&self) -> Problem {
    match self {
      Self::BadRequest(detail) => Problem::bad_request(detail.clone()),
      Self::Unauthorized(detail) => Problem::unauthorized(detail.clone()),
      Self::Forbidden(detail) => Problem::forbidden(detail.clone()),
      Self::NotFound(detail) => Problem::not_found(detail.clone()),
      Self::Internal(source) => {
        Problem::internal_server_error(source.to_string())
      }
    }
  }
}

/// Constraint violations surface to callers as 400s.
impl From<labhub_core::Error> for ApiError {
  fn from(err: labhub_core::Error) -> Self {
    Self::BadRequest(err.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    if let Self::Internal(source) = &self {
      tracing::error!(error = %source, "request failed");
    }
    self.to_problem().into_response()
  }
}
