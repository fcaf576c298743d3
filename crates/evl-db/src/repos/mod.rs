//! Repository modules for the audit trail and event membership.
//!
//! Each module adds methods to `EvlDb` via `impl EvlDb` blocks.

pub mod audit;
pub mod membership;
