//! Role check guarding read access to an event's audit trail.

use evl_core::entities::Membership;
use evl_core::enums::MemberRole;
use evl_core::identity::CallerIdentity;

use crate::error::AuditReadError;
use crate::ports::MembershipStore;

/// Roles allowed to read an event's audit trail. Anything else, including
/// role strings this crate does not recognise, is denied.
pub const AUDIT_READ_ROLES: &[MemberRole] = &[MemberRole::Owner, MemberRole::Manager];

/// Whether `role` may read the audit trail.
#[must_use]
pub fn can_read_audit(role: &MemberRole) -> bool {
    AUDIT_READ_ROLES.contains(role)
}

/// Membership lookup plus the [`AUDIT_READ_ROLES`] check.
///
/// Membership is looked up on every call; nothing is cached, so a role
/// change applies to the next read.
#[derive(Debug, Clone)]
pub struct AccessGate<M> {
    members: M,
}

impl<M: MembershipStore> AccessGate<M> {
    pub const fn new(members: M) -> Self {
        Self { members }
    }

    /// Authorize `caller` to read `event_id`'s trail, returning their
    /// membership on success.
    ///
    /// # Errors
    ///
    /// `NotAMember` without a membership row, `InsufficientPermissions`
    /// for a role outside the allow-list, `Store` if the lookup fails.
    pub async fn authorize(
        &self,
        event_id: &str,
        caller: &CallerIdentity,
    ) -> Result<Membership, AuditReadError> {
        let Some(membership) = self
            .members
            .get_membership(event_id, &caller.user_id)
            .await?
        else {
            tracing::info!(event_id, user_id = %caller.user_id, "audit read denied: not a member");
            return Err(AuditReadError::NotAMember {
                event_id: event_id.to_string(),
            });
        };

        if !can_read_audit(&membership.role) {
            tracing::info!(
                event_id,
                user_id = %caller.user_id,
                role = %membership.role,
                "audit read denied: insufficient role"
            );
            return Err(AuditReadError::InsufficientPermissions {
                role: membership.role,
            });
        }

        Ok(membership)
    }
}
