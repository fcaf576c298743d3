//! Event membership repository.
//!
//! The audit core only ever calls [`EvlDb::get_membership`]. The write
//! methods exist for administrative seeding and the operator binary.

use evl_core::entities::Membership;
use evl_core::enums::MemberRole;

use crate::EvlDb;
use crate::error::DatabaseError;

fn row_to_membership(row: &libsql::Row) -> Result<Membership, DatabaseError> {
    Ok(Membership {
        event_id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        role: MemberRole::from(row.get::<String>(2)?),
    })
}

impl EvlDb {
    /// Look up the caller's membership row for one event.
    pub async fn get_membership(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<Membership>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT event_id, user_id, role FROM event_members WHERE event_id = ?1 AND user_id = ?2",
                libsql::params![event_id, user_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_membership(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a membership or replace the role of an existing one.
    pub async fn upsert_membership(&self, membership: &Membership) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO event_members (event_id, user_id, role) VALUES (?1, ?2, ?3)
                 ON CONFLICT(event_id, user_id) DO UPDATE SET
                   role = ?3, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                libsql::params![
                    membership.event_id.as_str(),
                    membership.user_id.as_str(),
                    membership.role.as_str()
                ],
            )
            .await?;
        Ok(())
    }

    /// Remove a membership. Returns whether a row existed.
    pub async fn remove_membership(&self, event_id: &str, user_id: &str) -> Result<bool, DatabaseError> {
        let affected = self
            .conn()
            .execute(
                "DELETE FROM event_members WHERE event_id = ?1 AND user_id = ?2",
                libsql::params![event_id, user_id],
            )
            .await?;
        Ok(affected > 0)
    }

    /// All members of one event, ordered by user ID.
    pub async fn list_members(&self, event_id: &str) -> Result<Vec<Membership>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT event_id, user_id, role FROM event_members WHERE event_id = ?1 ORDER BY user_id",
                [event_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_membership(&row)?);
        }
        Ok(results)
    }
}
