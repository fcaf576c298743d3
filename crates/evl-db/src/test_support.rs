//! Shared test utilities for evl-db unit tests.

use evl_core::entities::{AuditLog, NewAuditLog};
use evl_core::enums::{AuditAction, AuditEntityType};

use crate::EvlDb;

/// Create an in-memory database with migrations applied.
pub async fn test_db() -> EvlDb {
    EvlDb::open_local(":memory:").await.unwrap()
}

/// A `create deal` entry for `event_id` with no payloads.
pub fn deal_entry(event_id: &str, deal_id: &str) -> NewAuditLog {
    NewAuditLog {
        event_id: Some(event_id.to_string()),
        user_id: Some("user-1".to_string()),
        action: AuditAction::Create,
        entity_type: AuditEntityType::Deal,
        entity_id: Some(deal_id.to_string()),
        old_values: None,
        new_values: None,
    }
}

/// A `sheet_append` entry for `event_id`.
pub fn sheet_entry(event_id: &str) -> NewAuditLog {
    NewAuditLog {
        event_id: Some(event_id.to_string()),
        user_id: Some("user-1".to_string()),
        action: AuditAction::SheetAppend,
        entity_type: AuditEntityType::Sheet,
        entity_id: Some("spreadsheet-1".to_string()),
        old_values: None,
        new_values: serde_json::json!({"sheet_title": "Deal Log"}).as_object().cloned(),
    }
}

/// Insert `count` deal entries for `event_id`, returning them in insertion order.
pub async fn seed_deals(db: &EvlDb, event_id: &str, count: usize) -> Vec<AuditLog> {
    let mut logs = Vec::with_capacity(count);
    for i in 0..count {
        let log = db
            .insert_audit_log(&deal_entry(event_id, &format!("D{i}")))
            .await
            .unwrap();
        logs.push(log);
    }
    logs
}
