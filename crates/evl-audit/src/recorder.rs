//! Best-effort audit writer.
//!
//! Recording is a side effect of a business operation that has already
//! happened, so nothing here can fail the caller. Every failure (identity,
//! payload, store) ends at [`contain`], is logged, and comes back as
//! [`RecordOutcome::Swallowed`].

use evl_core::entities::{AuditLog, NewAuditLog};
use evl_core::enums::{AuditAction, AuditEntityType, SheetAction};
use evl_core::identity::CallerIdentity;
use evl_core::payload::{Document, ensure_lossless, sheet_document};

use crate::error::RecordError;
use crate::ports::{AuditStore, IdentityResolver};

/// What happened to one recorder call.
#[derive(Debug)]
pub enum RecordOutcome {
    /// The entry was appended.
    Written(AuditLog),
    /// Nothing was attempted.
    Skipped(SkipReason),
    /// The write failed and the error was logged and discarded.
    Swallowed(RecordError),
}

impl RecordOutcome {
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }

    #[must_use]
    pub const fn log(&self) -> Option<&AuditLog> {
        match self {
            Self::Written(log) => Some(log),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Sheet records are only kept for a known event.
    MissingEventId,
}

/// Inputs for [`AuditRecorder::record_sheet_action`].
#[derive(Debug, Clone)]
pub struct SheetActionParams {
    /// Acting user, supplied by the caller rather than resolved.
    pub user_id: String,
    /// Owning event. `None` or blank makes the call a no-op.
    pub event_id: Option<String>,
    pub action: SheetAction,
    pub sheet_title: String,
    /// Stored as the record's `entity_id`.
    pub spreadsheet_id: Option<String>,
    /// Extra fields merged into `new_values`.
    pub changes: Option<Document>,
    /// Caller's event role at the time of the sync, merged into `new_values`.
    pub role: Option<String>,
}

impl SheetActionParams {
    pub fn new(
        user_id: impl Into<String>,
        event_id: Option<String>,
        action: SheetAction,
        sheet_title: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            event_id,
            action,
            sheet_title: sheet_title.into(),
            spreadsheet_id: None,
            changes: None,
            role: None,
        }
    }
}

/// Appends audit records through an [`AuditStore`], resolving the acting
/// principal through an [`IdentityResolver`].
#[derive(Debug, Clone)]
pub struct AuditRecorder<S, I> {
    store: S,
    identity: I,
}

impl<S: AuditStore, I: IdentityResolver> AuditRecorder<S, I> {
    pub const fn new(store: S, identity: I) -> Self {
        Self { store, identity }
    }

    /// Record a create/update/delete of a domain entity as the ambient caller.
    ///
    /// A missing caller is recorded as a null principal. A resolver error
    /// abandons the write.
    pub async fn record_action(
        &self,
        event_id: Option<&str>,
        action: AuditAction,
        entity_type: AuditEntityType,
        entity_id: Option<&str>,
        old_values: Option<Document>,
        new_values: Option<Document>,
    ) -> RecordOutcome {
        let entry = NewAuditLog {
            event_id: event_id.map(str::to_string),
            user_id: None,
            action,
            entity_type,
            entity_id: entity_id.map(str::to_string),
            old_values,
            new_values,
        };

        match self.identity.current_user().await {
            Ok(principal) => self.record_as(principal.as_ref(), entry).await,
            Err(e) => contain(&entry, Err(e.into())),
        }
    }

    /// Record an external-sheet sync operation for an explicit user.
    ///
    /// Without an event ID nothing is written. `entity_type` is always
    /// `sheet` and `old_values` is always empty.
    pub async fn record_sheet_action(&self, params: SheetActionParams) -> RecordOutcome {
        let Some(event_id) = params.event_id.filter(|id| !id.trim().is_empty()) else {
            tracing::debug!(
                action = %params.action,
                sheet_title = %params.sheet_title,
                "skipping sheet audit record without event id"
            );
            return RecordOutcome::Skipped(SkipReason::MissingEventId);
        };

        let entry = NewAuditLog {
            event_id: Some(event_id),
            user_id: None,
            action: params.action.into(),
            entity_type: AuditEntityType::Sheet,
            entity_id: params.spreadsheet_id,
            old_values: None,
            new_values: Some(sheet_document(
                &params.sheet_title,
                params.changes.as_ref(),
                params.role.as_deref(),
            )),
        };

        let principal = CallerIdentity::new(params.user_id);
        self.record_as(Some(&principal), entry).await
    }

    /// Shared write path for every entry point, taking an already-resolved
    /// principal. Whatever `entry.user_id` held is replaced by `principal`.
    pub async fn record_as(
        &self,
        principal: Option<&CallerIdentity>,
        mut entry: NewAuditLog,
    ) -> RecordOutcome {
        entry.user_id = principal.map(|p| p.user_id.clone());
        let result = self.write(&entry).await;
        contain(&entry, result)
    }

    async fn write(&self, entry: &NewAuditLog) -> Result<AuditLog, RecordError> {
        if !entry.action.pairs_with(entry.entity_type) {
            tracing::warn!(
                action = %entry.action,
                entity_type = %entry.entity_type,
                "audit action does not match entity type"
            );
        }
        for doc in [&entry.old_values, &entry.new_values].into_iter().flatten() {
            ensure_lossless(doc)?;
        }
        Ok(self.store.append(entry.clone()).await?)
    }
}

/// Error boundary of the write path. Logs a failure and turns any result
/// into a [`RecordOutcome`]; nothing passes through as an error.
pub fn contain(entry: &NewAuditLog, result: Result<AuditLog, RecordError>) -> RecordOutcome {
    match result {
        Ok(log) => {
            tracing::debug!(
                id = %log.id,
                event_id = ?log.event_id,
                action = %log.action,
                entity_type = %log.entity_type,
                "audit record written"
            );
            RecordOutcome::Written(log)
        }
        Err(error) => {
            tracing::warn!(
                event_id = ?entry.event_id,
                action = %entry.action,
                entity_type = %entry.entity_type,
                error = %error,
                "failed to write audit record"
            );
            RecordOutcome::Swallowed(error)
        }
    }
}
