//! Collaborator traits the audit core depends on.
//!
//! Each trait is a narrow seam: the recorder needs an identity resolver and
//! an append-capable store, the reader additionally needs a membership
//! lookup. Implementations live in [`crate::backends`] and
//! [`crate::identity`].

use std::future::Future;
use std::sync::Arc;

use evl_core::entities::{AuditLog, Membership, NewAuditLog};
use evl_core::identity::CallerIdentity;
use evl_core::responses::AuditLogFilter;

use crate::error::{IdentityError, StoreError};

/// Resolves the principal behind the current call.
pub trait IdentityResolver: Send + Sync {
    /// `Ok(None)` when there is no caller (system-initiated work).
    fn current_user(
        &self,
    ) -> impl Future<Output = Result<Option<CallerIdentity>, IdentityError>> + Send;
}

/// Read-only view of event membership.
pub trait MembershipStore: Send + Sync {
    fn get_membership(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<Membership>, StoreError>> + Send;
}

/// Append-only audit trail storage.
pub trait AuditStore: Send + Sync {
    /// Append one entry. The store assigns `id` and `created_at`.
    fn append(
        &self,
        entry: NewAuditLog,
    ) -> impl Future<Output = Result<AuditLog, StoreError>> + Send;

    /// One window of an event's trail ordered by `created_at` descending,
    /// plus the exact number of matching rows before pagination.
    fn query(
        &self,
        filter: &AuditLogFilter,
    ) -> impl Future<Output = Result<(Vec<AuditLog>, u64), StoreError>> + Send;
}

impl<T: IdentityResolver> IdentityResolver for Arc<T> {
    fn current_user(
        &self,
    ) -> impl Future<Output = Result<Option<CallerIdentity>, IdentityError>> + Send {
        (**self).current_user()
    }
}

impl<T: MembershipStore> MembershipStore for Arc<T> {
    fn get_membership(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<Membership>, StoreError>> + Send {
        (**self).get_membership(event_id, user_id)
    }
}

impl<T: AuditStore> AuditStore for Arc<T> {
    fn append(
        &self,
        entry: NewAuditLog,
    ) -> impl Future<Output = Result<AuditLog, StoreError>> + Send {
        (**self).append(entry)
    }

    fn query(
        &self,
        filter: &AuditLogFilter,
    ) -> impl Future<Output = Result<(Vec<AuditLog>, u64), StoreError>> + Send {
        (**self).query(filter)
    }
}
