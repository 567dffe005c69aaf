//! HTTP response templates for labhub services.
//!
//! The two canned response bodies shared by every endpoint: the RFC 7807
//! problem envelope ([`Problem`], `application/problem+json`) and the
//! plain-text SSH key listing ([`SshAuthorizedKeys`], `text/plain`).
//! Handlers return [`ApiError`], which renders as a problem.
//!
//! Routing, auth, TLS, and transport concerns are the embedding server's
//! responsibility.

pub mod error;
pub mod keys;
pub mod problem;

pub use error::ApiError;
pub use keys::SshAuthorizedKeys;
pub use problem::Problem;
