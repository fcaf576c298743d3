//! Store implementations for the collaborator traits.
//!
//! - `libsql`: the persistent `EvlDb` store.
//! - `memory`: `tokio::sync::RwLock`-guarded vectors for tests and embedders.

pub mod libsql;
pub mod memory;
