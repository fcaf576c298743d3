//! Structured payload documents.
//!
//! `old_values` and `new_values` are open-ended JSON objects so that every
//! entity type can be snapshotted without a schema per type. The only check
//! applied is that a document survives a trip through its storage encoding.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// A JSON object: string keys to arbitrary JSON values.
pub type Document = Map<String, Value>;

/// Key under which the sheet title is stored in a sheet record's `new_values`.
pub const SHEET_TITLE_KEY: &str = "sheet_title";

/// Key under which the caller's role snapshot is stored in a sheet record.
pub const ROLE_KEY: &str = "role";

/// Convert any serializable value into a [`Document`].
///
/// # Errors
///
/// Returns `CoreError::Serialization` if the value cannot be serialized, or
/// `CoreError::Validation` if it does not serialize to a JSON object.
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> Result<Document, CoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::Validation(format!(
            "payload must be a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Verify a document encodes to text and decodes back to the same value.
///
/// # Errors
///
/// Returns `CoreError` if encoding fails or the decoded value differs.
pub fn ensure_lossless(doc: &Document) -> Result<(), CoreError> {
    let encoded = serde_json::to_string(doc)?;
    let decoded: Document = serde_json::from_str(&encoded)?;
    if &decoded == doc {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "payload does not round-trip through JSON".to_string(),
        ))
    }
}

/// Build the `new_values` document for a sheet record.
///
/// `changes` are copied first; `sheet_title` and, when present, `role` are
/// written afterwards so those keys always reflect the call's own arguments.
#[must_use]
pub fn sheet_document(sheet_title: &str, changes: Option<&Document>, role: Option<&str>) -> Document {
    let mut doc = changes.cloned().unwrap_or_default();
    doc.insert(
        SHEET_TITLE_KEY.to_string(),
        Value::String(sheet_title.to_string()),
    );
    if let Some(role) = role {
        doc.insert(ROLE_KEY.to_string(), Value::String(role.to_string()));
    }
    doc
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
