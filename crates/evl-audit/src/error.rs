use evl_core::enums::MemberRole;
use evl_core::errors::CoreError;
use evl_db::error::DatabaseError;
use thiserror::Error;

/// Failure inside an [`AuditStore`](crate::AuditStore) or
/// [`MembershipStore`](crate::MembershipStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failure while resolving the calling principal.
///
/// Distinct from "no caller": a resolver that simply has no identity
/// returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("invalid identity: {0}")]
    Invalid(String),
}

/// Why a recorder write was abandoned. Never returned to callers as an
/// error; it only travels inside `RecordOutcome::Swallowed`.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("identity resolution failed: {0}")]
    Identity(#[from] IdentityError),

    #[error("payload rejected: {0}")]
    Payload(#[from] CoreError),

    #[error("audit store write failed: {0}")]
    Store(#[from] StoreError),
}

/// Typed failures of the audit read path.
///
/// Display strings are shown to the caller as-is.
#[derive(Debug, Error)]
pub enum AuditReadError {
    #[error("not authenticated: sign in to view the audit log")]
    Unauthenticated,

    #[error("permission denied: you are not a member of event {event_id}")]
    NotAMember { event_id: String },

    #[error(
        "permission denied: role '{role}' cannot view the audit log (owner or manager required)"
    )]
    InsufficientPermissions { role: MemberRole },

    #[error("audit log unavailable: {0}")]
    Store(#[from] StoreError),
}

impl AuditReadError {
    /// Whether this is an access decision rather than an infrastructure fault.
    #[must_use]
    pub const fn is_denial(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}
