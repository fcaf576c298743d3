//! # evl-db
//!
//! libSQL storage for the Eventline audit trail and event membership.
//!
//! Holds two tables: the append-only `audit_logs` trail and the
//! `event_members` role table consulted by the audit read gate. IDs and
//! timestamps for audit rows are assigned inside the database on insert.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for audit and membership operations.
pub struct EvlDb {
    /// Never read. Held so the database outlives `conn`.
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl EvlDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let evl_db = Self { db, conn };
        evl_db.run_migrations().await?;
        tracing::debug!(path, "opened audit database");
        Ok(evl_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
