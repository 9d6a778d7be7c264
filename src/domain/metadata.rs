//! Structured metadata attached to records and its text encoding
//!
//! Store columns are text only, so metadata is written as a JSON object string
//! and parsed back on read. Anything other than an object in a metadata column
//! means the row was not written through [`encode_metadata`].

use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Opaque key/value metadata
pub type Metadata = Map<String, Value>;

/// Serializes optional metadata for storage; `None` stays `None` (stored as NULL)
pub fn encode_metadata(metadata: Option<&Metadata>) -> Result<Option<String>, DomainError> {
    metadata
        .map(|m| {
            serde_json::to_string(m)
                .map_err(|e| DomainError::internal(format!("Failed to encode metadata: {}", e)))
        })
        .transpose()
}

/// Parses a stored metadata column back into a map
pub fn decode_metadata(text: Option<&str>) -> Result<Option<Metadata>, DomainError> {
    let Some(text) = text else {
        return Ok(None);
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(other) => Err(DomainError::storage(format!(
            "Stored metadata is not an object: {}",
            other
        ))),
        Err(e) => Err(DomainError::storage(format!(
            "Malformed stored metadata: {}",
            e
        ))),
    }
}

/// Parses user-supplied JSON text into metadata, rejecting non-objects
pub fn parse_metadata_arg(text: &str) -> Result<Metadata, DomainError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::validation("Metadata must be a JSON object")),
        Err(e) => Err(DomainError::validation(format!("Invalid metadata JSON: {}", e))),
    }
}
