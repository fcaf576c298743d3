//! Collaborator impls for the libSQL-backed [`EvlDb`].

use evl_core::entities::{AuditLog, Membership, NewAuditLog};
use evl_core::responses::AuditLogFilter;
use evl_db::EvlDb;

use crate::error::StoreError;
use crate::ports::{AuditStore, MembershipStore};

impl AuditStore for EvlDb {
    async fn append(&self, entry: NewAuditLog) -> Result<AuditLog, StoreError> {
        Ok(self.insert_audit_log(&entry).await?)
    }

    async fn query(&self, filter: &AuditLogFilter) -> Result<(Vec<AuditLog>, u64), StoreError> {
        Ok(self.query_audit_logs(filter).await?)
    }
}

impl MembershipStore for EvlDb {
    async fn get_membership(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<Membership>, StoreError> {
        Ok(EvlDb::get_membership(self, event_id, user_id).await?)
    }
}
