//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual
//! datetime format issue (`SQLite`'s `datetime('now')` vs RFC 3339).

use chrono::{DateTime, Utc};
use evl_core::payload::Document;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.123Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all evl-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Decode an optional JSON object stored as TEXT.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string is not a JSON object.
pub fn parse_optional_document(s: Option<&str>) -> Result<Option<Document>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => {
            let doc = serde_json::from_str(s)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON document in column: {e}")))?;
            Ok(Some(doc))
        }
        _ => Ok(None),
    }
}

/// Encode an optional document for a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Serialization` if encoding fails.
pub fn encode_optional_document(doc: Option<&Document>) -> Result<Option<String>, DatabaseError> {
    doc.map(serde_json::to_string).transpose().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evl_core::enums::AuditEntityType;
    use serde_json::json;

    #[test]
    fn parses_store_timestamp_with_millis() {
        let dt = parse_datetime("2026-02-24T09:15:30.250Z").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn parses_sqlite_default_timestamp() {
        let dt = parse_datetime("2026-02-24 09:15:30").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-02-24T09:15:30+00:00");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parses_entity_type() {
        let et: AuditEntityType = parse_enum("vehicle").unwrap();
        assert_eq!(et, AuditEntityType::Vehicle);
        assert!(parse_enum::<AuditEntityType>("invoice").is_err());
    }

    #[test]
    fn document_roundtrip_through_text() {
        let doc = json!({"value": 100}).as_object().cloned();
        let encoded = encode_optional_document(doc.as_ref()).unwrap();
        assert_eq!(encoded.as_deref(), Some(r#"{"value":100}"#));
        assert_eq!(parse_optional_document(encoded.as_deref()).unwrap(), doc);
    }

    #[test]
    fn empty_and_null_documents_are_none() {
        assert_eq!(parse_optional_document(None).unwrap(), None);
        assert_eq!(parse_optional_document(Some("")).unwrap(), None);
        assert!(parse_optional_document(Some("[1,2]")).is_err());
    }
}
