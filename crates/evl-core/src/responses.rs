//! Query and response types for reading the audit trail.

use serde::{Deserialize, Serialize};

use crate::entities::AuditLog;
use crate::enums::AuditEntityType;

/// Store-level filter: one event, optional entity type, one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogFilter {
    pub event_id: String,
    pub entity_type: Option<AuditEntityType>,
    pub limit: u32,
    pub offset: u32,
}

/// One page of an event's audit trail, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLogPage {
    pub logs: Vec<AuditLog>,
    /// Matching records before pagination.
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

impl AuditLogPage {
    /// Whether records exist past the end of this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.offset) + (self.logs.len() as u64) < self.total
    }

    /// Number of pages of `limit` records needed to cover `total`.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}
