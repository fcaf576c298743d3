//! # evl-audit
//!
//! Event-scoped audit trail for Eventline.
//!
//! Two entry points sit on top of three collaborator traits:
//!
//! - [`AuditRecorder`] appends one record per mutating or sheet-sync
//!   operation. It never fails its caller: every error is logged and
//!   reported back only as a [`RecordOutcome`].
//! - [`AuditReader`] resolves the caller, checks their event role through
//!   the [`AccessGate`], and returns one newest-first page of the trail.
//!
//! Collaborators ([`IdentityResolver`], [`MembershipStore`], [`AuditStore`])
//! are implemented for the libSQL-backed `EvlDb` and for [`MemoryStore`].

pub mod backends;
pub mod error;
pub mod gate;
pub mod identity;
pub mod ports;
pub mod reader;
pub mod recorder;

pub use backends::memory::MemoryStore;
pub use error::{AuditReadError, IdentityError, RecordError, StoreError};
pub use gate::{AUDIT_READ_ROLES, AccessGate};
pub use identity::{ConfigIdentity, StaticIdentity};
pub use ports::{AuditStore, IdentityResolver, MembershipStore};
pub use reader::{AuditQueryOptions, AuditReader};
pub use recorder::{AuditRecorder, RecordOutcome, SheetActionParams, SkipReason};
