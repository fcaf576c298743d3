//! # evl-core
//!
//! Core types shared across all Eventline crates:
//! - Audit log and membership entity structs
//! - Closed action, entity-type, and role enums
//! - Caller identity passed between the auth edge and the audit core
//! - Structured payload documents for `old_values` / `new_values`
//! - Cross-cutting error types
//! - Audit read filter and page types
//! - ID prefix constants

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod payload;
pub mod responses;
