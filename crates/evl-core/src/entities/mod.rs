//! Entity structs for the audit core.
//!
//! Each entity maps to a table in the libSQL database (see
//! `evl-db/migrations/001_initial.sql`).

mod audit;
mod membership;

pub use audit::{AuditLog, NewAuditLog};
pub use membership::Membership;
