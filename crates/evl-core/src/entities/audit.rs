use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, AuditEntityType};
use crate::payload::Document;

/// An append-only audit trail entry, as stored.
///
/// `id` and `created_at` are assigned by the store on insert and never change.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditLog {
    pub id: String,
    pub event_id: Option<String>,
    pub user_id: Option<String>,
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: Option<String>,
    pub old_values: Option<Document>,
    pub new_values: Option<Document>,
    pub created_at: DateTime<Utc>,
}

/// An audit entry as handed to the store, before `id` / `created_at` exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAuditLog {
    pub event_id: Option<String>,
    pub user_id: Option<String>,
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: Option<String>,
    pub old_values: Option<Document>,
    pub new_values: Option<Document>,
}

impl NewAuditLog {
    /// Finalize into a stored record with store-assigned fields.
    #[must_use]
    pub fn into_log(self, id: String, created_at: DateTime<Utc>) -> AuditLog {
        AuditLog {
            id,
            event_id: self.event_id,
            user_id: self.user_id,
            action: self.action,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            old_values: self.old_values,
            new_values: self.new_values,
            created_at,
        }
    }
}
