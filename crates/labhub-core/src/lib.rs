//! Shared schema components for the labhub API surface.
//!
//! Every request and response body in the API is assembled from the types
//! here: constrained scalars (ids, MAC addresses, bounded strings),
//! server-assigned timestamps, and the uniform list envelope. Each
//! constrained type validates in its constructor *and* in its serde
//! `Deserialize` impl, so a value that deserializes is a value that
//! conforms.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The axum layer lives in `labhub-api`.
//!
//! The published contract itself, the OpenAPI component catalog other
//! services validate against, is rendered by [`openapi`] from the same
//! constants the constructors check.

pub mod error;
pub mod flag;
pub mod id;
pub mod mac;
pub mod openapi;
pub mod page;
pub mod text;
pub mod time;

pub use error::{Error, Result};
pub use flag::BoolDefaultTrue;
pub use id::{Id, NullableId};
pub use mac::MacAddress;
pub use page::{DEFAULT_PAGE_LIMIT, Page};
pub use text::{String64, String128, String1024};
pub use time::{ReadOnlyDateTime, Timestamps};
// The UUID component is the `uuid` crate's type, verbatim.
pub use uuid::Uuid;

#[cfg(test)]
mod uuid_tests {
  use super::Uuid;

  #[test]
  fn uuid_component_round_trips() {
    let json = "\"550e8400-e29b-41d4-a716-446655440000\"";
    let id: Uuid = serde_json::from_str(json).unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), json);
  }

  #[test]
  fn rejects_non_uuid_strings() {
    assert!(serde_json::from_str::<Uuid>("\"not-a-uuid\"").is_err());
  }
}
