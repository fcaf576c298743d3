//! Audit trail repository.
//!
//! Append-only: this module exposes insert and windowed reads, nothing that
//! rewrites a row. `id` and `created_at` come from the database, and
//! `created_at` never moves backwards within one event even if the wall
//! clock does.

use evl_core::entities::{AuditLog, NewAuditLog};
use evl_core::responses::AuditLogFilter;

use crate::EvlDb;
use crate::error::DatabaseError;
use crate::helpers::{
    encode_optional_document, get_opt_string, parse_datetime, parse_enum, parse_optional_document,
};

const SELECT_COLUMNS: &str = "id, event_id, user_id, action, entity_type, entity_id, old_values, new_values, created_at";

/// Index of the trailing `COUNT(*)` column in windowed reads.
const TOTAL_COLUMN: i32 = 9;

fn count_from(raw: i64) -> Result<u64, DatabaseError> {
    u64::try_from(raw).map_err(|e| DatabaseError::Query(format!("negative audit count: {e}")))
}

fn row_to_audit_log(row: &libsql::Row) -> Result<AuditLog, DatabaseError> {
    Ok(AuditLog {
        id: row.get::<String>(0)?,
        event_id: get_opt_string(row, 1)?,
        user_id: get_opt_string(row, 2)?,
        action: parse_enum(&row.get::<String>(3)?)?,
        entity_type: parse_enum(&row.get::<String>(4)?)?,
        entity_id: get_opt_string(row, 5)?,
        old_values: parse_optional_document(get_opt_string(row, 6)?.as_deref())?,
        new_values: parse_optional_document(get_opt_string(row, 7)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl EvlDb {
    /// Append one audit entry and return it with its store-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a payload cannot be encoded or the INSERT fails.
    pub async fn insert_audit_log(&self, entry: &NewAuditLog) -> Result<AuditLog, DatabaseError> {
        let old_values = encode_optional_document(entry.old_values.as_ref())?;
        let new_values = encode_optional_document(entry.new_values.as_ref())?;

        let mut rows = self
            .conn()
            .query(
                "INSERT INTO audit_logs (event_id, user_id, action, entity_type, entity_id, old_values, new_values, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7,
                         MAX(strftime('%Y-%m-%dT%H:%M:%fZ', 'now'),
                             COALESCE((SELECT MAX(created_at) FROM audit_logs WHERE event_id IS ?1), '')))
                 RETURNING id, created_at",
                libsql::params![
                    entry.event_id.as_deref(),
                    entry.user_id.as_deref(),
                    entry.action.as_str(),
                    entry.entity_type.as_str(),
                    entry.entity_id.as_deref(),
                    old_values,
                    new_values
                ],
            )
            .await?;

        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let id = row.get::<String>(0)?;
        let created_at = parse_datetime(&row.get::<String>(1)?)?;

        Ok(entry.clone().into_log(id, created_at))
    }

    /// Read one window of an event's trail, newest first, plus the total
    /// number of matching rows before pagination.
    ///
    /// The total rides along each window row as a scalar subquery, so the
    /// count and the window come from one statement. Only an empty window
    /// needs a second, count-only statement. No transaction is opened: the
    /// connection is shared by every clone of the handle.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either query fails or a row is malformed.
    pub async fn query_audit_logs(
        &self,
        filter: &AuditLogFilter,
    ) -> Result<(Vec<AuditLog>, u64), DatabaseError> {
        let mut params: Vec<libsql::Value> = vec![libsql::Value::Text(filter.event_id.clone())];
        let mut where_clause = String::from("WHERE event_id = ?1");
        if let Some(entity_type) = filter.entity_type {
            params.push(libsql::Value::Text(entity_type.as_str().to_string()));
            where_clause.push_str(&format!(" AND entity_type = ?{}", params.len()));
        }

        let mut window_params = params.clone();
        window_params.push(libsql::Value::Integer(i64::from(filter.limit)));
        let limit_idx = window_params.len();
        window_params.push(libsql::Value::Integer(i64::from(filter.offset)));
        let offset_idx = window_params.len();

        let sql = format!(
            "SELECT {SELECT_COLUMNS}, (SELECT COUNT(*) FROM audit_logs {where_clause})
             FROM audit_logs {where_clause}
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?{limit_idx} OFFSET ?{offset_idx}"
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(window_params))
            .await?;

        let mut logs = Vec::new();
        let mut total = None;
        while let Some(row) = rows.next().await? {
            if total.is_none() {
                total = Some(count_from(row.get::<i64>(TOTAL_COLUMN)?)?);
            }
            logs.push(row_to_audit_log(&row)?);
        }

        let total = match total {
            Some(total) => total,
            None => self.count_audit_logs(&where_clause, params).await?,
        };
        Ok((logs, total))
    }

    async fn count_audit_logs(
        &self,
        where_clause: &str,
        params: Vec<libsql::Value>,
    ) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT COUNT(*) FROM audit_logs {where_clause}"),
                libsql::params_from_iter(params),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        count_from(row.get::<i64>(0)?)
    }

    /// Fetch a single audit entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no row has that ID.
    pub async fn get_audit_log(&self, id: &str) -> Result<AuditLog, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLUMNS} FROM audit_logs WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_audit_log(&row)
    }
}
