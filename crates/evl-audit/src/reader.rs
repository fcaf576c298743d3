//! Access-gated, paginated view of an event's audit trail.

use evl_config::AuditConfig;
use evl_core::enums::AuditEntityType;
use evl_core::responses::{AuditLogFilter, AuditLogPage};

use crate::error::AuditReadError;
use crate::gate::AccessGate;
use crate::ports::{AuditStore, IdentityResolver, MembershipStore};

/// Optional knobs for [`AuditReader::get_audit_logs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditQueryOptions {
    /// Page size. Defaults to `audit.default_limit`, capped at `audit.max_limit`.
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Exact-match filter on the record's entity type.
    pub entity_type: Option<AuditEntityType>,
}

impl AuditQueryOptions {
    #[must_use]
    pub const fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            entity_type: None,
        }
    }

    #[must_use]
    pub const fn with_entity_type(mut self, entity_type: AuditEntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }
}

/// Reads audit pages for callers holding an allowed event role.
pub struct AuditReader<S, M, I> {
    store: S,
    gate: AccessGate<M>,
    identity: I,
    limits: AuditConfig,
}

impl<S, M, I> AuditReader<S, M, I>
where
    S: AuditStore,
    M: MembershipStore,
    I: IdentityResolver,
{
    pub fn new(store: S, members: M, identity: I) -> Self {
        Self::with_limits(store, members, identity, AuditConfig::default())
    }

    pub const fn with_limits(store: S, members: M, identity: I, limits: AuditConfig) -> Self {
        Self {
            store,
            gate: AccessGate::new(members),
            identity,
            limits,
        }
    }

    /// Return one newest-first page of `event_id`'s trail.
    ///
    /// Identity resolution, the membership check and the query run in that
    /// order; the first failure ends the call.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a caller (or if resolution fails),
    /// `NotAMember` / `InsufficientPermissions` from the access gate, and
    /// `Store` for lookup or query failures.
    pub async fn get_audit_logs(
        &self,
        event_id: &str,
        options: AuditQueryOptions,
    ) -> Result<AuditLogPage, AuditReadError> {
        let caller = match self.identity.current_user().await {
            Ok(Some(caller)) => caller,
            Ok(None) => {
                tracing::info!(event_id, "audit read denied: no caller identity");
                return Err(AuditReadError::Unauthenticated);
            }
            Err(error) => {
                tracing::warn!(event_id, error = %error, "audit read denied: identity resolution failed");
                return Err(AuditReadError::Unauthenticated);
            }
        };

        self.gate.authorize(event_id, &caller).await?;

        let filter = AuditLogFilter {
            event_id: event_id.to_string(),
            entity_type: options.entity_type,
            limit: self.effective_limit(options.limit),
            offset: options.offset.unwrap_or(0),
        };
        let (logs, total) = self.store.query(&filter).await?;

        tracing::debug!(
            event_id,
            user_id = %caller.user_id,
            returned = logs.len(),
            total,
            "audit page read"
        );

        Ok(AuditLogPage {
            logs,
            total,
            limit: filter.limit,
            offset: filter.offset,
        })
    }

    fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.limits.default_limit)
            .min(self.limits.max_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::memory::MemoryStore;
    use crate::error::{IdentityError, StoreError};
    use crate::identity::StaticIdentity;
    use evl_core::entities::NewAuditLog;
    use evl_core::enums::{AuditAction, MemberRole};
    use evl_core::identity::CallerIdentity;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Arc;

    type MemoryReader = AuditReader<Arc<MemoryStore>, Arc<MemoryStore>, StaticIdentity>;

    fn reader_for(store: &Arc<MemoryStore>, user: &str) -> MemoryReader {
        AuditReader::new(
            Arc::clone(store),
            Arc::clone(store),
            StaticIdentity::user(user),
        )
    }

    async fn seed(store: &MemoryStore, event_id: &str, entity_type: AuditEntityType, count: usize) {
        let action = if entity_type == AuditEntityType::Sheet {
            AuditAction::SheetUpdate
        } else {
            AuditAction::Update
        };
        for i in 0..count {
            store
                .append(NewAuditLog {
                    event_id: Some(event_id.to_string()),
                    user_id: Some("seed".into()),
                    action,
                    entity_type,
                    entity_id: Some(format!("E{i}")),
                    old_values: None,
                    new_values: None,
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn anonymous_caller_is_unauthenticated() {
        let store = Arc::new(MemoryStore::new());
        let reader = AuditReader::new(
            Arc::clone(&store),
            Arc::clone(&store),
            StaticIdentity::anonymous(),
        );
        let err = reader
            .get_audit_logs("evt-1", AuditQueryOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuditReadError::Unauthenticated));
    }

    #[tokio::test]
    async fn resolver_failure_is_unauthenticated() {
        struct Down;
        impl IdentityResolver for Down {
            async fn current_user(&self) -> Result<Option<CallerIdentity>, IdentityError> {
                Err(IdentityError::Unavailable("timeout".into()))
            }
        }

        let store = Arc::new(MemoryStore::new());
        let reader = AuditReader::new(Arc::clone(&store), Arc::clone(&store), Down);
        let err = reader
            .get_audit_logs("evt-1", AuditQueryOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuditReadError::Unauthenticated));
    }

    #[rstest]
    #[case(AuditQueryOptions::default())]
    #[case(AuditQueryOptions::page(0, 0))]
    #[case(AuditQueryOptions::page(500, 10_000))]
    #[case(AuditQueryOptions::page(10, 0).with_entity_type(AuditEntityType::Sheet))]
    #[tokio::test]
    async fn non_member_is_denied_for_any_window(#[case] options: AuditQueryOptions) {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "evt-1", AuditEntityType::Deal, 3).await;
        let reader = reader_for(&store, "stranger");

        let err = reader.get_audit_logs("evt-1", options).await.unwrap_err();
        assert!(matches!(err, AuditReadError::NotAMember { .. }));
    }

    #[rstest]
    #[case(MemberRole::Owner, true)]
    #[case(MemberRole::Manager, true)]
    #[case(MemberRole::Viewer, false)]
    #[case(MemberRole::Other("staff".into()), false)]
    #[tokio::test]
    async fn role_decides_access(#[case] role: MemberRole, #[case] allowed: bool) {
        let store = Arc::new(MemoryStore::new());
        store.add_member("evt-1", "u1", role).await;
        seed(&store, "evt-1", AuditEntityType::Deal, 2).await;
        let reader = reader_for(&store, "u1");

        let result = reader
            .get_audit_logs("evt-1", AuditQueryOptions::default())
            .await;
        if allowed {
            assert_eq!(result.unwrap().total, 2);
        } else {
            assert!(matches!(
                result.unwrap_err(),
                AuditReadError::InsufficientPermissions { .. }
            ));
        }
    }

    #[rstest]
    #[case(50, 0, 50)]
    #[case(50, 100, 20)]
    #[case(50, 120, 0)]
    #[tokio::test]
    async fn pagination_over_120_records(
        #[case] limit: u32,
        #[case] offset: u32,
        #[case] expected: usize,
    ) {
        let store = Arc::new(MemoryStore::new());
        store.add_member("evt-1", "owner", MemberRole::Owner).await;
        seed(&store, "evt-1", AuditEntityType::Deal, 120).await;
        let reader = reader_for(&store, "owner");

        let page = reader
            .get_audit_logs("evt-1", AuditQueryOptions::page(limit, offset))
            .await
            .unwrap();
        assert_eq!(page.logs.len(), expected);
        assert_eq!(page.total, 120);
        assert_eq!(page.offset, offset);
    }

    #[tokio::test]
    async fn pages_are_newest_first() {
        let store = Arc::new(MemoryStore::new());
        store.add_member("evt-1", "owner", MemberRole::Owner).await;
        seed(&store, "evt-1", AuditEntityType::Deal, 30).await;
        let reader = reader_for(&store, "owner");

        let page = reader
            .get_audit_logs("evt-1", AuditQueryOptions::default())
            .await
            .unwrap();
        for pair in page.logs.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(page.logs[0].entity_id.as_deref(), Some("E29"));
    }

    #[tokio::test]
    async fn defaults_and_clamping_follow_config() {
        let store = Arc::new(MemoryStore::new());
        store.add_member("evt-1", "owner", MemberRole::Owner).await;
        seed(&store, "evt-1", AuditEntityType::Deal, 12).await;
        let reader = AuditReader::with_limits(
            Arc::clone(&store),
            Arc::clone(&store),
            StaticIdentity::user("owner"),
            AuditConfig {
                default_limit: 5,
                max_limit: 8,
            },
        );

        let page = reader
            .get_audit_logs("evt-1", AuditQueryOptions::default())
            .await
            .unwrap();
        assert_eq!((page.logs.len(), page.limit, page.offset), (5, 5, 0));

        let page = reader
            .get_audit_logs("evt-1", AuditQueryOptions::page(100, 0))
            .await
            .unwrap();
        assert_eq!((page.logs.len(), page.limit), (8, 8));
        assert!(page.has_more());
    }

    #[tokio::test]
    async fn entity_filter_narrows_total() {
        let store = Arc::new(MemoryStore::new());
        store.add_member("evt-1", "mgr", MemberRole::Manager).await;
        seed(&store, "evt-1", AuditEntityType::Deal, 4).await;
        seed(&store, "evt-1", AuditEntityType::Sheet, 3).await;
        let reader = reader_for(&store, "mgr");

        let page = reader
            .get_audit_logs(
                "evt-1",
                AuditQueryOptions::default().with_entity_type(AuditEntityType::Sheet),
            )
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert!(page.logs.iter().all(|l| l.entity_type == AuditEntityType::Sheet));
    }

    #[tokio::test]
    async fn role_downgrade_applies_on_next_read() {
        let store = Arc::new(MemoryStore::new());
        store.add_member("evt-1", "u1", MemberRole::Manager).await;
        let reader = reader_for(&store, "u1");

        assert!(
            reader
                .get_audit_logs("evt-1", AuditQueryOptions::default())
                .await
                .is_ok()
        );

        store.add_member("evt-1", "u1", MemberRole::Viewer).await;
        let err = reader
            .get_audit_logs("evt-1", AuditQueryOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuditReadError::InsufficientPermissions { .. }));
    }

    #[tokio::test]
    async fn store_outage_is_a_typed_error() {
        let store = Arc::new(MemoryStore::new());
        store.add_member("evt-1", "owner", MemberRole::Owner).await;
        let reader = reader_for(&store, "owner");
        store.set_unavailable(true);

        let err = reader
            .get_audit_logs("evt-1", AuditQueryOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AuditReadError::Store(StoreError::Unavailable(_))
        ));
    }
}
