use evl_core::enums::SheetAction;
use evl_core::payload::{Document, ensure_lossless, to_document};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a sheet action, accepting both `append` and `sheet_append`.
pub fn parse_sheet_action(raw: &str) -> anyhow::Result<SheetAction> {
    let normalized = raw.replace('-', "_");
    if normalized.starts_with("sheet_") {
        parse_enum(&normalized, "sheet action")
    } else {
        parse_enum(&format!("sheet_{normalized}"), "sheet action")
    }
}

/// Parse an optional `--old` / `--new` / `--changes` argument into a document.
pub fn parse_document(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Document>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|error| anyhow::anyhow!("invalid {field} JSON: {error}"))?;
    let doc = to_document(&value).map_err(|error| anyhow::anyhow!("invalid {field}: {error}"))?;
    ensure_lossless(&doc)?;
    Ok(Some(doc))
}
