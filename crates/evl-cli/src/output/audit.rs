//! Table rendering for audit pages.

use evl_core::payload::Document;
use evl_core::responses::AuditLogPage;
use serde_json::Value;

use super::{table, table_options, value_to_cell};

const COLUMNS: [&str; 7] = [
    "created_at",
    "action",
    "entity_type",
    "entity_id",
    "user_id",
    "changes",
    "id",
];

/// One row per record plus a `showing a-b of total` footer.
pub fn render_page_table(page: &AuditLogPage) -> String {
    if page.logs.is_empty() {
        return format!("(no audit records; total {})", page.total);
    }

    let rows = page
        .logs
        .iter()
        .map(|log| {
            vec![
                log.created_at.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
                log.action.to_string(),
                log.entity_type.to_string(),
                log.entity_id.clone().unwrap_or_else(|| "-".into()),
                log.user_id.clone().unwrap_or_else(|| "system".into()),
                summarize_changes(log.old_values.as_ref(), log.new_values.as_ref()),
                log.id.clone(),
            ]
        })
        .collect::<Vec<_>>();

    let start = u64::from(page.offset) + 1;
    let end = u64::from(page.offset) + page.logs.len() as u64;
    format!(
        "{}\nshowing {start}-{end} of {}",
        table::render_entity_table(&COLUMNS, &rows, table_options()),
        page.total
    )
}

/// `key: old -> new` for changed keys, `key=value` for one-sided payloads.
fn summarize_changes(
    old: Option<&Document>,
    new: Option<&Document>,
) -> String {
    let mut parts = Vec::new();
    match (old, new) {
        (Some(old), Some(new)) => {
            for (key, new_value) in new {
                match old.get(key) {
                    Some(old_value) if old_value == new_value => {}
                    Some(old_value) => parts.push(format!(
                        "{key}: {} -> {}",
                        value_to_cell(old_value),
                        value_to_cell(new_value)
                    )),
                    None => parts.push(format!("{key}: - -> {}", value_to_cell(new_value))),
                }
            }
            for key in old.keys().filter(|key| !new.contains_key(*key)) {
                parts.push(format!("{key}: removed"));
            }
        }
        (Some(only), None) | (None, Some(only)) => {
            for (key, value) in only {
                parts.push(format!("{key}={}", value_to_cell(value)));
            }
        }
        (None, None) => {}
    }

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}
