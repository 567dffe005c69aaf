//! The published component catalog.
//!
//! Other services validate against this contract, so the names, formats,
//! and annotations emitted here are load-bearing. Every numeric constraint
//! is interpolated from the same constant the corresponding constructor
//! checks, which keeps the code and the published contract from drifting
//! apart.

use serde_json::{Value, json};

use crate::{
  mac::MacAddress,
  text::{String64, String128, String1024},
};

/// The reusable schema components, keyed by their published names.
pub fn components() -> Value {
  json!({
    "BooleanDefaultTrue": {
      "type": "boolean",
      "default": true,
    },
    "ID": {
      "type": "integer",
      "minimum": 1,
    },
    "ID_null": {
      "type": "integer",
      "minimum": 1,
      "nullable": true,
    },
    "MACAddress": {
      "type": "string",
      "minLength": MacAddress::LEN,
      "maxLength": MacAddress::LEN,
      "pattern": MacAddress::PATTERN,
      "example": "11:22:33:44:55:66",
    },
    "ReadOnlyDateTime": {
      "type": "string",
      "format": "date-time",
      "readOnly": true,
    },
    "ReadOnlyID": {
      "allOf": [
        {"$ref": "#/components/schemas/ID"},
        {
          "type": "integer",
          "format": "int64",
          "readOnly": true,
          "description": "Record ID, assigned by the server.",
        },
      ],
    },
    "String64": {
      "type": "string",
      "maxLength": String64::MAX_LEN,
    },
    "String128": {
      "type": "string",
      "maxLength": String128::MAX_LEN,
    },
    "String1024": {
      "type": "string",
      "maxLength": String1024::MAX_LEN,
    },
    "TimestampModel": {
      "type": "object",
      "properties": {
        "created_at": {"$ref": "#/components/schemas/ReadOnlyDateTime"},
        "updated_at": {"$ref": "#/components/schemas/ReadOnlyDateTime"},
      },
    },
    "UUID": {
      "type": "string",
      "format": "uuid",
    },
  })
}

/// The reusable response templates.
pub fn responses() -> Value {
  json!({
    "problem": {
      "description": "Problem details, RFC 7807.",
      "content": {
        "application/problem+json": {
          "schema": {
            "type": "object",
            "properties": {
              "type": {"type": "string", "format": "uri-reference"},
              "title": {"type": "string"},
              "detail": {"type": "string"},
              "status": {"type": "integer"},
            },
            "additionalProperties": true,
          },
          "example": {
            "detail": "Invalid token",
            "status": 401,
            "title": "Unauthorized",
            "type": "about:blank",
          },
        },
      },
    },
    "ssh_authorized_keys": {
      "description":
        "Public SSH keys in `authorized_keys` format, one per line.",
      "content": {
        "text/plain": {
          "schema": {"type": "string"},
          "example":
            "ssh-ed25519 AAAAexamplesshkeyexamplesshkeyexamplesshkeyABCD",
        },
      },
    },
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_component_is_present() {
    let components = components();
    for name in [
      "BooleanDefaultTrue",
      "ID",
      "ID_null",
      "MACAddress",
      "ReadOnlyDateTime",
      "ReadOnlyID",
      "String64",
      "String128",
      "String1024",
      "TimestampModel",
      "UUID",
    ] {
      assert!(components.get(name).is_some(), "missing component {name}");
    }
  }

  #[test]
  fn constraints_match_the_validating_constants() {
    let components = components();
    assert_eq!(
      components["MACAddress"]["pattern"],
      json!(MacAddress::PATTERN)
    );
    assert_eq!(components["MACAddress"]["maxLength"], json!(17));
    assert_eq!(components["String64"]["maxLength"], json!(64));
    assert_eq!(components["String128"]["maxLength"], json!(128));
    assert_eq!(components["String1024"]["maxLength"], json!(1024));
    assert_eq!(components["ID"]["minimum"], json!(crate::Id::MIN));
  }

  #[test]
  fn id_null_is_nullable_id() {
    let components = components();
    assert_eq!(components["ID_null"]["nullable"], json!(true));
    assert_eq!(components["ID_null"]["minimum"], components["ID"]["minimum"]);
  }

  #[test]
  fn read_only_id_composes_id() {
    let components = components();
    let all_of = components["ReadOnlyID"]["allOf"].as_array().unwrap();
    assert_eq!(all_of[0]["$ref"], json!("#/components/schemas/ID"));
    assert_eq!(all_of[1]["readOnly"], json!(true));
    assert_eq!(all_of[1]["format"], json!("int64"));
  }

  #[test]
  fn timestamp_model_embeds_read_only_datetime_twice() {
    let components = components();
    let props = &components["TimestampModel"]["properties"];
    for field in ["created_at", "updated_at"] {
      assert_eq!(
        props[field]["$ref"],
        json!("#/components/schemas/ReadOnlyDateTime"),
      );
    }
  }

  #[test]
  fn problem_response_allows_additional_properties() {
    let responses = responses();
    let schema =
      &responses["problem"]["content"]["application/problem+json"]["schema"];
    assert_eq!(schema["additionalProperties"], json!(true));
    for field in ["type", "title", "detail", "status"] {
      assert!(schema["properties"].get(field).is_some());
    }
  }

  #[test]
  fn ssh_response_is_plain_text() {
    let responses = responses();
    let content = &responses["ssh_authorized_keys"]["content"];
    assert_eq!(content["text/plain"]["schema"]["type"], json!("string"));
  }
}
